use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::models::{PageMetadata, PageType};

/// URL path extensions that classify a link as an image
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Hosts that classify a link as a video
const VIDEO_HOSTS: [&str; 3] = ["youtube.com", "vimeo.com", "dailymotion.com"];

// Meta tags in both attribute orderings: key then content, content then key
static META_KEY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+(name|property)=["']([^"']+)["']\s+content=["']([^"']+)["']"#)
        .unwrap()
});

static META_CONTENT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+content=["']([^"']+)["']\s+(name|property)=["']([^"']+)["']"#)
        .unwrap()
});

static ARTICLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<article[^>]*>").unwrap());

static PARAGRAPH_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p[\s>]").unwrap());

// Inline text of a <p> tag, measured up to the next '<'
static LONG_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>[^<]{200,}").unwrap());

/// Extract page metadata from raw HTML.
///
/// For `title`, `description` and `author` a standard `<meta name=...>` tag
/// wins over the corresponding OpenGraph property; `image`, `published_at`
/// and `site_name` come from OpenGraph tags only. Malformed HTML is never an
/// error, only missing fields.
pub fn extract(html: &str, source_url: &str) -> PageMetadata {
    let title = meta_content(html, "title")
        .or_else(|| og_content(html, "title"))
        .unwrap_or_default();

    let description = meta_content(html, "description")
        .or_else(|| og_content(html, "description"))
        .unwrap_or_default();

    let author = meta_content(html, "author").or_else(|| og_content(html, "article:author"));

    PageMetadata {
        title,
        description,
        image: og_content(html, "image"),
        author,
        published_at: og_content(html, "article:published_time"),
        site_name: og_content(html, "site_name"),
        kind: classify(html, source_url),
    }
}

/// Content of a `<meta name="..." content="...">` tag
fn meta_content(html: &str, name: &str) -> Option<String> {
    tag_content(html, "name", name)
}

/// Content of a `<meta property="og:..." content="...">` tag
fn og_content(html: &str, property: &str) -> Option<String> {
    tag_content(html, "property", &format!("og:{property}"))
}

/// First `content` value of a meta tag whose key attribute matches `value`.
/// Both attribute orderings are accepted: the content attribute may follow
/// or precede the key attribute in source order.
fn tag_content(html: &str, attr: &str, value: &str) -> Option<String> {
    for caps in META_KEY_FIRST.captures_iter(html) {
        if caps[1].eq_ignore_ascii_case(attr) && caps[2].eq_ignore_ascii_case(value) {
            return Some(caps[3].to_string());
        }
    }

    for caps in META_CONTENT_FIRST.captures_iter(html) {
        if caps[2].eq_ignore_ascii_case(attr) && caps[3].eq_ignore_ascii_case(value) {
            return Some(caps[1].to_string());
        }
    }

    None
}

/// Classify the page, first match wins: image extension on the URL path,
/// then video host or `og:type`, then article signals, then other.
fn classify(html: &str, source_url: &str) -> PageType {
    if has_image_extension(source_url) {
        return PageType::Image;
    }

    let og_type = og_content(html, "type");

    if is_video_host(source_url) || og_type.as_deref() == Some("video") {
        return PageType::Video;
    }

    if og_type.as_deref() == Some("article") || is_likely_article(html) {
        return PageType::Article;
    }

    PageType::Other
}

fn has_image_extension(source_url: &str) -> bool {
    let path = match Url::parse(source_url) {
        Ok(url) => url.path().to_ascii_lowercase(),
        // Malformed URLs still get a best-effort check on the raw text
        Err(_) => source_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase(),
    };

    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{ext}")))
}

fn is_video_host(source_url: &str) -> bool {
    let haystack = match Url::parse(source_url) {
        Ok(url) => url.host_str().unwrap_or_default().to_ascii_lowercase(),
        Err(_) => source_url.to_ascii_lowercase(),
    };

    VIDEO_HOSTS.iter().any(|host| haystack.contains(host))
}

/// A page likely carries an article when it has an `<article>` tag, or
/// more than 3 paragraphs of which at least one runs 200+ characters of
/// inline text.
fn is_likely_article(html: &str) -> bool {
    if ARTICLE_TAG.is_match(html) {
        return true;
    }

    PARAGRAPH_TAG.find_iter(html).count() > 3 && LONG_PARAGRAPH.is_match(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text() -> String {
        "word ".repeat(50)
    }

    #[test]
    fn og_title_used_when_no_meta_title() {
        let html = r#"<head><meta property="og:title" content="X"></head>"#;
        assert_eq!(extract(html, "https://example.com").title, "X");
    }

    #[test]
    fn meta_title_wins_over_og_title() {
        let html = r#"
            <meta property="og:title" content="OG Title">
            <meta name="title" content="Meta Title">
        "#;
        assert_eq!(extract(html, "https://example.com").title, "Meta Title");
    }

    #[test]
    fn missing_title_and_description_are_empty() {
        let metadata = extract("<html><body>hi</body></html>", "https://example.com");
        assert_eq!(metadata.title, "");
        assert_eq!(metadata.description, "");
        assert_eq!(metadata.author, None);
        assert_eq!(metadata.image, None);
        assert_eq!(metadata.published_at, None);
        assert_eq!(metadata.site_name, None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let html = r#"<META NAME="DESCRIPTION" CONTENT="Loud page">"#;
        assert_eq!(extract(html, "https://example.com").description, "Loud page");
    }

    #[test]
    fn key_must_match_exactly() {
        let html = r#"<meta name="subtitle" content="No"><meta property="og:title2" content="No">"#;
        assert_eq!(extract(html, "https://example.com").title, "");
    }

    #[test]
    fn content_attribute_may_precede_the_key() {
        let html = r#"<meta content="Reversed" name="title">"#;
        assert_eq!(extract(html, "https://example.com").title, "Reversed");

        let html = r#"<meta content="http://i/r.jpg" property="og:image">"#;
        assert_eq!(
            extract(html, "https://example.com").image.as_deref(),
            Some("http://i/r.jpg")
        );
    }

    #[test]
    fn single_quoted_attributes_match() {
        let html = r#"<meta name='author' content='Jane Doe'>"#;
        assert_eq!(
            extract(html, "https://example.com").author.as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn author_falls_back_to_og_article_author() {
        let html = r#"<meta property="og:article:author" content="Ann">"#;
        assert_eq!(
            extract(html, "https://example.com").author.as_deref(),
            Some("Ann")
        );
    }

    #[test]
    fn og_only_fields_ignore_meta_name_tags() {
        // image comes from og:image only, a name= tag must not satisfy it
        let html = r#"<meta name="image" content="http://i/nope.jpg">"#;
        assert_eq!(extract(html, "https://example.com").image, None);
    }

    #[test]
    fn published_time_and_site_name_from_og_tags() {
        let html = r#"
            <meta property="og:article:published_time" content="2024-01-15T10:30:00Z">
            <meta property="og:site_name" content="Example News">
        "#;
        let metadata = extract(html, "https://example.com");
        assert_eq!(
            metadata.published_at.as_deref(),
            Some("2024-01-15T10:30:00Z")
        );
        assert_eq!(metadata.site_name.as_deref(), Some("Example News"));
    }

    #[test]
    fn image_extension_always_classifies_as_image() {
        let article_html = format!("<article><p>{}</p></article>", long_text());
        assert_eq!(
            extract(&article_html, "https://x.com/photo.png").kind,
            PageType::Image
        );
        assert_eq!(
            extract("", "https://x.com/pics/cat.JPEG").kind,
            PageType::Image
        );
        // extension check applies to the path, not the query string
        assert_eq!(
            extract("", "https://x.com/page?file=cat.png").kind,
            PageType::Other
        );
    }

    #[test]
    fn video_hosts_always_classify_as_video() {
        assert_eq!(
            extract("", "https://youtube.com/watch?v=1").kind,
            PageType::Video
        );
        assert_eq!(
            extract("", "https://www.vimeo.com/12345").kind,
            PageType::Video
        );
        assert_eq!(
            extract("", "https://Dailymotion.com/video/x1").kind,
            PageType::Video
        );
    }

    #[test]
    fn og_type_video_classifies_as_video() {
        let html = r#"<meta property="og:type" content="video">"#;
        assert_eq!(extract(html, "https://example.com").kind, PageType::Video);
    }

    #[test]
    fn og_type_article_classifies_as_article() {
        let html = r#"<meta property="og:type" content="article">"#;
        assert_eq!(extract(html, "https://example.com").kind, PageType::Article);
    }

    #[test]
    fn article_tag_alone_classifies_as_article() {
        let html = "<html><body><article><h1>T</h1></article></body></html>";
        assert_eq!(extract(html, "https://example.com").kind, PageType::Article);

        let html = r#"<article class="post">short</article>"#;
        assert_eq!(extract(html, "https://example.com").kind, PageType::Article);
    }

    #[test]
    fn many_paragraphs_with_a_long_one_classify_as_article() {
        let html = format!(
            "<p>one</p><p>two</p><p>three</p><p>{}</p>",
            long_text()
        );
        assert_eq!(extract(&html, "https://example.com").kind, PageType::Article);
    }

    #[test]
    fn short_paragraphs_alone_are_not_an_article() {
        let html = "<p>a</p><p>b</p><p>c</p><p>d</p><p>e</p>";
        assert_eq!(extract(html, "https://example.com").kind, PageType::Other);
    }

    #[test]
    fn long_paragraph_without_enough_paragraphs_is_not_an_article() {
        let html = format!("<p>{}</p>", long_text());
        assert_eq!(extract(&html, "https://example.com").kind, PageType::Other);
    }

    #[test]
    fn no_signals_classify_as_other() {
        let html = "<html><head><title>t</title></head><body><div>x</div></body></html>";
        assert_eq!(extract(html, "https://example.com").kind, PageType::Other);
    }

    #[test]
    fn image_wins_over_video_host() {
        assert_eq!(
            extract("", "https://youtube.com/thumb.jpg").kind,
            PageType::Image
        );
    }

    #[test]
    fn unparseable_url_still_classifies() {
        assert_eq!(extract("", "not a url at all.png").kind, PageType::Image);
        assert_eq!(extract("", "youtube.com/watch?v=1").kind, PageType::Video);
    }

    #[test]
    fn end_to_end_article_example() {
        let html = format!(
            r#"<html><head><meta property="og:title" content="Cats"><meta property="og:image" content="http://i/cats.jpg"></head><body><article><p>{}</p></article></body></html>"#,
            long_text()
        );

        let metadata = extract(&html, "http://example.com/post");

        assert_eq!(
            metadata,
            PageMetadata {
                title: "Cats".to_string(),
                description: String::new(),
                image: Some("http://i/cats.jpg".to_string()),
                author: None,
                published_at: None,
                site_name: None,
                kind: PageType::Article,
            }
        );
    }
}
