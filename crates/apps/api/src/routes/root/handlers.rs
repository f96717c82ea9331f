use app_state::AnalyzerSettings;
use axum::extract::State;
use axum::response::Html;
use color_analysis::Locale;

struct PageText {
    lang: &'static str,
    title: &'static str,
    heading: &'static str,
    colors: &'static str,
    submit: &'static str,
    docs: &'static str,
}

const fn page_text(locale: Locale) -> PageText {
    match locale {
        Locale::En => PageText {
            lang: "en",
            title: "Garment Color Classifier",
            heading: "Upload a photo of a piece of clothing",
            colors: "Number of colors",
            submit: "Upload",
            docs: "API documentation",
        },
        Locale::Ja => PageText {
            lang: "ja",
            title: "服の色自動分類アプリ",
            heading: "服の画像をアップロードしてください",
            colors: "抽出する色の数",
            submit: "アップロード",
            docs: "APIドキュメント",
        },
    }
}

fn upload_page(analyzer: &AnalyzerSettings) -> String {
    let text = page_text(analyzer.locale);
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
    <head>
        <meta charset="utf-8">
        <title>{title}</title>
    </head>
    <body>
        <h1>{heading}</h1>
        <form action="/uploadfile" enctype="multipart/form-data" method="post">
            <input name="file" type="file" accept="image/*" required>
            <label>{colors}
                <input name="num_colors" type="number" min="1" max="{max}" value="{default}">
            </label>
            <input type="submit" value="{submit}">
        </form>
        <hr>
        <h2>{docs}</h2>
        <p><a href="/docs">Swagger UI</a></p>
        <p><a href="/redoc">ReDoc</a></p>
    </body>
</html>
"#,
        lang = text.lang,
        title = text.title,
        heading = text.heading,
        colors = text.colors,
        max = analyzer.max_colors,
        default = analyzer.num_colors,
        submit = text.submit,
        docs = text.docs,
    )
}

/// The upload page.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "HTML page with an upload form", content_type = "text/html")
    )
)]
pub async fn root(State(analyzer): State<AnalyzerSettings>) -> Html<String> {
    Html(upload_page(&analyzer))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is healthy and ready to accept traffic", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
