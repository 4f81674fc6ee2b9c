use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::builder::page::{collect_documents, render_page};
use crate::builder::site::index::write_index;
use crate::builder::types::{BuildContext, BuildSummary};
use crate::config::Config;
use crate::directory::{clean_destination, copy_static_dir};
use crate::markdown::{highlight_css, MarkdownRenderer};
use crate::template::LiquidTemplates;
use crate::utils::error::{NotFoundKind, SiteError, SiteResult};
use crate::utils::fs::write_file;

/// Directory under each output root receiving the static assets
const STATIC_OUTPUT_DIR: &str = "static";

/// Stylesheet written when a highlight theme is configured
const HIGHLIGHT_CSS_FILE: &str = "highlight.css";

/// Build the site into every configured output root, in order.
///
/// The first failure aborts the remaining roots.
pub fn build_site(config: &Config) -> SiteResult<Vec<BuildSummary>> {
    let start_time = Instant::now();

    // Checked before any output root is cleared
    if !config.content_dir.is_dir() {
        return Err(SiteError::not_found(NotFoundKind::ContentDir, &config.content_dir));
    }

    info!("Using content directory: {}", config.content_dir.display());
    info!("Using template directory: {}", config.template_dir.display());

    let stylesheet = match &config.highlight_theme {
        Some(theme) => Some(highlight_css(theme)?),
        None => None,
    };

    let renderer = MarkdownRenderer::new();
    let templates = LiquidTemplates::new(&config.template_dir, &config.base_url)?;
    let ctx = BuildContext {
        config,
        renderer: &renderer,
        templates: &templates,
        highlight_css: stylesheet.as_deref(),
    };

    let mut summaries = Vec::with_capacity(config.output_dirs.len());
    for output_root in &config.output_dirs {
        summaries.push(build_output(&ctx, output_root)?);
    }

    info!("Site built in {:.2?}", start_time.elapsed());
    Ok(summaries)
}

/// Build one output root from scratch
pub fn build_output(ctx: &BuildContext, output_root: &Path) -> SiteResult<BuildSummary> {
    info!("Building into {}", output_root.display());

    clean_destination(output_root)?;

    let static_files = copy_static_dir(&ctx.config.static_dir, &output_root.join(STATIC_OUTPUT_DIR))?;
    debug!("Copied {} static files", static_files);

    if let Some(css) = ctx.highlight_css {
        write_file(&output_root.join(HIGHLIGHT_CSS_FILE), css)?;
    }

    let documents = collect_documents(ctx.config)?;
    let mut pages = Vec::with_capacity(documents.len());
    for document in &documents {
        debug!("Rendering {}", document.display());
        pages.push(render_page(ctx, document, output_root)?);
    }

    let index_written = write_index(ctx, output_root, &pages)?;

    info!(
        "Wrote {} pages to {} ({} static files)",
        pages.len(),
        output_root.display(),
        static_files
    );

    Ok(BuildSummary {
        output_dir: output_root.to_path_buf(),
        pages,
        static_files,
        index_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;
    use walkdir::WalkDir;

    const PAGE_TEMPLATE: &str = "<html><title>{{ title }}</title><body>{{ content }}</body></html>";
    const INDEX_TEMPLATE: &str =
        "<ul>{% for page in pages %}<li><a href=\"{{ page.url }}\">{{ page.title }}</a></li>{% endfor %}</ul>";

    struct Site {
        dir: tempfile::TempDir,
        config: Config,
    }

    impl Site {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path();
            let config = Config {
                content_dir: root.join("content"),
                output_dirs: vec![root.join("output")],
                template_dir: root.join("templates"),
                static_dir: root.join("static"),
                base_url: "/myrepo".to_string(),
                ..Config::default()
            };
            let site = Site { dir, config };
            fs::create_dir_all(&site.config.content_dir).unwrap();
            site.write("templates/page.html", PAGE_TEMPLATE);
            site.write("templates/index.html", INDEX_TEMPLATE);
            site
        }

        fn write(&self, rel: &str, body: &str) {
            let path = self.dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }

        fn output(&self) -> PathBuf {
            self.config.output_dirs[0].clone()
        }
    }

    /// Relative path to contents for every file under `root`
    fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(root)
            .into_iter()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_builds_pages_and_index() {
        let site = Site::new();
        site.write("content/about_us.md", "Hello");
        site.write("content/blog/post.md", "---\ntitle: Home\n---\n# Post");

        let summaries = build_site(&site.config).unwrap();
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert!(summary.index_written);
        assert_eq!(summary.pages.len(), 2);
        assert_eq!(summary.pages[0].title, "About Us");
        assert_eq!(summary.pages[1].url, "/myrepo/blog/post.html");

        let out = site.output();
        let about = fs::read_to_string(out.join("about_us.html")).unwrap();
        assert!(about.contains("<title>Untitled</title>"));
        assert!(about.contains("<p>Hello</p>"));

        let post = fs::read_to_string(out.join("blog/post.html")).unwrap();
        assert!(post.contains("<title>Home</title>"));

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(
            index,
            "<ul><li><a href=\"/myrepo/about_us.html\">About Us</a></li>\
             <li><a href=\"/myrepo/blog/post.html\">Home</a></li></ul>"
        );
    }

    #[test]
    fn test_rebuild_is_byte_identical_and_removes_stale_files() {
        let site = Site::new();
        site.write("content/a.md", "A");
        site.write("content/b/c.md", "C");

        build_site(&site.config).unwrap();
        let first = snapshot(&site.output());

        fs::write(site.output().join("stale.html"), "old").unwrap();
        build_site(&site.config).unwrap();

        assert!(!site.output().join("stale.html").exists());
        assert_eq!(snapshot(&site.output()), first);
    }

    #[test]
    fn test_every_output_root_gets_identical_tree() {
        let mut site = Site::new();
        let docs = site.dir.path().join("docs");
        site.config.output_dirs.push(docs.clone());
        site.write("content/guide/intro.md", "Intro");
        site.write("static/css/site.css", "body {}");

        let summaries = build_site(&site.config).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].output_dir, docs);
        assert_eq!(summaries[0].static_files, 1);

        assert!(docs.join("static/css/site.css").is_file());
        assert_eq!(snapshot(&site.output()), snapshot(&docs));
    }

    #[test]
    fn test_existing_index_is_kept_unless_overwrite() {
        let mut site = Site::new();
        site.write("content/index.md", "Welcome");
        site.write("content/other.md", "Other");

        let summary = build_site(&site.config).unwrap().remove(0);
        assert!(!summary.index_written);
        let index = fs::read_to_string(site.output().join("index.html")).unwrap();
        assert!(index.contains("<p>Welcome</p>"));

        site.config.overwrite_index = true;
        let summary = build_site(&site.config).unwrap().remove(0);
        assert!(summary.index_written);
        let index = fs::read_to_string(site.output().join("index.html")).unwrap();
        assert!(index.starts_with("<ul>"));
        assert!(index.contains("/myrepo/other.html"));
    }

    #[test]
    fn test_unknown_template_aborts_without_writing_page() {
        let site = Site::new();
        site.write("content/bad.md", "---\ntemplate: missing.html\n---\nBody");

        let err = build_site(&site.config).unwrap_err();
        assert!(matches!(err, SiteError::NotFound { kind: NotFoundKind::Template, .. }));
        assert!(!site.output().join("bad.html").exists());
    }

    #[test]
    fn test_missing_content_dir_leaves_output_alone() {
        let site = Site::new();
        fs::remove_dir_all(&site.config.content_dir).unwrap();
        site.write("output/keep.html", "keep");

        let err = build_site(&site.config).unwrap_err();
        assert!(matches!(err, SiteError::NotFound { kind: NotFoundKind::ContentDir, .. }));
        assert!(site.output().join("keep.html").exists());
    }

    #[test]
    fn test_highlight_stylesheet_written_per_root() {
        let mut site = Site::new();
        site.config.highlight_theme = Some("InspiredGitHub".to_string());
        site.write("content/code.md", "```rust\nfn main() {}\n```");

        build_site(&site.config).unwrap();

        let css = fs::read_to_string(site.output().join("highlight.css")).unwrap();
        assert!(!css.is_empty());
        let page = fs::read_to_string(site.output().join("code.html")).unwrap();
        assert!(page.contains("<div class=\"highlight\">"));
    }

    #[test]
    fn test_unknown_highlight_theme_is_config_error() {
        let mut site = Site::new();
        site.config.highlight_theme = Some("no-such-theme".to_string());

        let err = build_site(&site.config).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(!site.output().exists());
    }
}
