pub fn index_template(title: &str, creator: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body class="light-theme">
    <header class="header">
        <h1 class="title">{title}</h1>
        <button type="button" id="themeToggle" class="theme-toggle" aria-label="Toggle theme">
            <span class="theme-icon">🌙</span>
        </button>
    </header>

    <main class="container">
        <form id="promptForm" class="prompt-form">
            <label for="apiKey">API key</label>
            <div class="password-field">
                <input type="password" id="apiKey" name="apiKey" autocomplete="off" required>
                <button type="button" id="passwordToggle" class="password-toggle" aria-label="Show API key">
                    <span class="eye-icon">👁️</span>
                </button>
            </div>

            <div class="tabs" role="tablist">
                <button type="button" class="tab active" data-model="text">Text model</button>
                <button type="button" class="tab" data-model="image">Image model</button>
            </div>
            <input type="hidden" id="modelType" name="modelType" value="text">

            <label for="originalPrompt">Original prompt</label>
            <textarea id="originalPrompt" name="originalPrompt" rows="6" required></textarea>

            <button type="submit" id="submitBtn" class="submit-btn">
                <span class="btn-text">Generate safe prompt</span>
                <span id="loadingSpinner" class="spinner"></span>
            </button>
        </form>

        <section id="resultSection" class="result-section" style="display: none;">
            <div class="result-header">
                <h2>Safe prompt</h2>
                <button type="button" id="copyBtn" class="copy-btn">Copy</button>
            </div>
            <p id="resultContent" class="result-content"></p>
        </section>
    </main>

    <footer class="footer">
        <p>Created by {creator}</p>
    </footer>

    <script src="/js/script.js"></script>
</body>
</html>
"#,
        title = title,
        creator = creator,
    )
}
