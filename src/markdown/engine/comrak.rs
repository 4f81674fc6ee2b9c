use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings.
///
/// Code blocks keep `class="language-*"` on the `<code>` element so the
/// syntax highlighter can pick them up afterwards.
pub fn create_comrak_options() -> Options<'static> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = false;
    options.render.unsafe_ = true;

    // Parse options
    options.parse.smart = true;
    options.parse.default_info_string = Some("text".to_string());

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    comrak::markdown_to_html(content, options)
}
