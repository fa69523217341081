//! HTML field extraction

use scraper::{ElementRef, Html, Selector};

/// What a fetched page turned out to contain. The edit-session state
/// machine matches on this instead of probing the document itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// An edit form was found. Token and timestamp are empty strings when
    /// the deployment omits them, which is tolerated.
    Editable {
        text: String,
        token: String,
        timestamp: String,
    },
    /// No edit form, but a content view was present. The page is likely
    /// protected and the viewer lacks edit privileges.
    ReadOnly { text: String },
    /// Neither an edit form nor a content view.
    NotFound,
}

/// Classify a fetched edit view and pull out its fields.
pub fn extract_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let Ok(form_sel) = Selector::parse(r#"form[name="editform"]"#) else {
        return PageContent::NotFound;
    };
    let Ok(textarea_sel) = Selector::parse("textarea") else {
        return PageContent::NotFound;
    };

    if let Some(form) = document.select(&form_sel).next() {
        let text = element_text(form, r#"textarea[name="wpTextbox1"]"#)
            .or_else(|| form.select(&textarea_sel).next().map(collect_text))
            .unwrap_or_default();
        let token = input_value(form, "wpEditToken").unwrap_or_default();
        let timestamp = input_value(form, "wpEdittime").unwrap_or_default();
        return PageContent::Editable {
            text,
            token,
            timestamp,
        };
    }

    if let Some(viewer) = document.select(&textarea_sel).next() {
        return PageContent::ReadOnly {
            text: collect_text(viewer),
        };
    }

    PageContent::NotFound
}

/// Pluck one attribute value from the first element matching a selector.
pub fn attribute(html: &str, selector: &str, name: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr(name))
        .map(str::to_string)
}

/// The `title` attributes of list anchors under a container, in document
/// order. Used for what-links-here and category membership listings.
pub fn link_titles(html: &str, container: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(sel) = Selector::parse(&format!("{container} ul li a")) else {
        return Vec::new();
    };
    document
        .select(&sel)
        .filter_map(|a| a.value().attr("title"))
        .map(str::to_string)
        .collect()
}

/// The text content of every anchor matching a selector.
pub fn link_texts(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(sel) = Selector::parse(selector) else {
        return Vec::new();
    };
    document
        .select(&sel)
        .map(collect_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Whether the response body carries the login error marker.
pub fn has_login_error(html: &str) -> bool {
    let document = Html::parse_document(html);
    match Selector::parse("p.error") {
        Ok(sel) => document.select(&sel).next().is_some(),
        Err(_) => false,
    }
}

/// The region between the rendered-content markers of a special page.
pub fn content_region(html: &str) -> Option<&str> {
    let start = html.find("<!-- start content -->")?;
    let rest = &html[start + "<!-- start content -->".len()..];
    let end = rest.find("<!-- end content -->")?;
    Some(&rest[..end])
}

fn element_text(scope: ElementRef, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    scope.select(&sel).next().map(collect_text)
}

fn input_value(scope: ElementRef, name: &str) -> Option<String> {
    let sel = Selector::parse("input").ok()?;
    scope
        .select(&sel)
        .find(|input| input.value().attr("name") == Some(name))
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
}

fn collect_text(el: ElementRef) -> String {
    el.text().collect()
}
