//! Page entity and the edit-session state machine

use wikibot_query::{self as query, PageContent};

use crate::error::WikiError;
use crate::wiki::Wiki;
use crate::Result;

/// Maximum POST attempts for one logical submit before giving up on a
/// persistent edit conflict.
const MAX_SUBMIT_ATTEMPTS: u32 = 10;

/// How a page variant addresses the wiki and extracts its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Article,
    /// Addressed with the `Category:` namespace prefix; the stored name
    /// stays unprefixed.
    Category,
    /// No edit form; rendered content is taken from the region between
    /// the start/end content markers.
    Special,
}

/// One remote page and the edit-session state held for it.
///
/// The content text and the edit token/timestamp pair are only ever
/// refreshed together by a single load, never independently. The
/// token/timestamp pair is the server's optimistic-concurrency handle:
/// echoing it back on submission lets the server detect a concurrent
/// edit, and comparing it before and after a submission is the only
/// race signal available through the HTML interface.
pub struct Page {
    wiki: Wiki,
    kind: PageKind,
    name: String,
    section: Option<u32>,
    text: Option<String>,
    edit_token: Option<String>,
    edit_timestamp: Option<String>,
    read_only: bool,
}

impl Page {
    /// Create a handle without loading it. The factory methods on
    /// `Wiki` load immediately; use this to defer the fetch.
    pub fn detached(wiki: Wiki, kind: PageKind, name: &str, section: Option<u32>) -> Self {
        Self {
            wiki,
            kind,
            name: name.to_string(),
            section,
            text: None,
            edit_token: None,
            edit_timestamp: None,
            read_only: false,
        }
    }

    /// The stored page name, without any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name the wiki is addressed with, namespace prefix included.
    pub fn full_name(&self) -> String {
        match self.kind {
            PageKind::Category => format!("Category:{}", self.name),
            PageKind::Article | PageKind::Special => self.name.clone(),
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn edit_token(&self) -> Option<&str> {
        self.edit_token.as_deref()
    }

    pub fn edit_timestamp(&self) -> Option<&str> {
        self.edit_timestamp.as_deref()
    }

    /// Whether the last load found no edit form, only a content view.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Fetch the page's edit view and refresh text, token and
    /// timestamp from it.
    pub fn load(&mut self) -> Result<()> {
        let url = self.wiki.page_url(&self.full_name(), self.section, Some("edit"))?;
        tracing::debug!(url = %url, "loading edit view");
        let html = self.wiki.browser().get(url)?;
        self.apply(query::extract_page(&html))?;

        // A category handle may have been created from a prefixed name;
        // the stored name stays in the unprefixed form.
        if self.kind == PageKind::Category {
            if let Some(bare) = self.name.strip_prefix("Category:") {
                self.name = bare.to_string();
            }
        }
        Ok(())
    }

    fn apply(&mut self, content: PageContent) -> Result<()> {
        match content {
            PageContent::Editable {
                text,
                token,
                timestamp,
            } => {
                self.text = Some(text);
                self.edit_token = Some(token);
                self.edit_timestamp = Some(timestamp);
                self.read_only = false;
            }
            PageContent::ReadOnly { text } => {
                self.text = Some(text);
                self.read_only = true;
            }
            PageContent::NotFound => return Err(WikiError::NoEditFormFound),
        }
        Ok(())
    }

    /// Send the held text to the wiki.
    ///
    /// The server may answer a successful save with anything from the
    /// saved page to the next edit form. Both are handled by parsing the
    /// response like a load: no form at all means the edit went through
    /// and a reload refreshes the token; a form carrying a token or
    /// timestamp other than the submitted pair means a concurrent edit
    /// won the race, and the submit is retried with the fresh pair while
    /// the text is left untouched. At most 10 attempts are made.
    pub fn submit(&mut self, summary: &str, minor: bool, watch: bool) -> Result<()> {
        if self.read_only {
            return Err(WikiError::ReadOnlyViolation);
        }
        let url = self.wiki.page_url(&self.full_name(), self.section, Some("submit"))?;

        for attempt in 1..=MAX_SUBMIT_ATTEMPTS {
            let token = self.edit_token.clone().unwrap_or_default();
            let timestamp = self.edit_timestamp.clone().unwrap_or_default();

            let mut fields = vec![
                ("wpTextbox1", self.text.clone().unwrap_or_default()),
                ("wpSummary", summary.to_string()),
                ("wpSave", "1".to_string()),
                ("wpEditToken", token.clone()),
                ("wpEdittime", timestamp.clone()),
            ];
            if minor {
                fields.push(("wpMinoredit", "1".to_string()));
            }
            if watch {
                fields.push(("wpWatchthis", "on".to_string()));
            }

            tracing::debug!(page = %self.full_name(), attempt, "submitting edit");
            let body = self.wiki.browser().post(url.clone(), &fields)?;

            match query::extract_page(&body) {
                PageContent::NotFound => {
                    // Not the preview page but the saved article. The
                    // edit went through; reload for a fresh token and
                    // timestamp.
                    self.load()?;
                    return Ok(());
                }
                content => self.apply(content)?,
            }

            // Deployments without the token/timestamp handles cannot
            // signal conflicts at all.
            if token.is_empty() && timestamp.is_empty() {
                return Ok(());
            }
            if self.edit_token.as_deref() == Some(token.as_str())
                && self.edit_timestamp.as_deref() == Some(timestamp.as_str())
            {
                return Ok(());
            }
            tracing::warn!(
                page = %self.full_name(),
                attempt,
                "edit conflict detected, retrying with the fresh token"
            );
        }
        Err(WikiError::ResubmitLimitExceeded)
    }

    /// Delete this page.
    pub fn delete(&self, reason: &str) -> Result<()> {
        let url = self.wiki.page_url(&self.full_name(), None, Some("delete"))?;
        let fields = [
            ("wpReason", reason.to_string()),
            ("wpEditToken", self.edit_token.clone().unwrap_or_default()),
            ("wpConfirmB", "Delete Page".to_string()),
        ];
        self.wiki.browser().post(url, &fields)?;
        Ok(())
    }

    /// Protect this page against edits, or against moves only.
    pub fn protect(&self, reason: &str, moves_only: bool) -> Result<()> {
        let url = self.wiki.page_url(&self.full_name(), None, Some("protect"))?;
        let mut fields = vec![
            ("wpReasonProtect", reason.to_string()),
            ("wpEditToken", self.edit_token.clone().unwrap_or_default()),
            ("wpConfirmProtectB", "Protect Page".to_string()),
        ];
        if moves_only {
            fields.push(("wpMoveOnly", "1".to_string()));
        }
        self.wiki.browser().post(url, &fields)?;
        Ok(())
    }

    /// Lift a protection.
    pub fn unprotect(&self, reason: &str) -> Result<()> {
        let url = self.wiki.page_url(&self.full_name(), None, Some("unprotect"))?;
        let fields = [
            ("wpReasonProtect", reason.to_string()),
            ("wpEditToken", self.edit_token.clone().unwrap_or_default()),
            ("wpConfirmProtectB", "Protect Page".to_string()),
        ];
        self.wiki.browser().post(url, &fields)?;
        Ok(())
    }

    /// Names of the pages linking to this one.
    pub fn what_links_here(&self, limit: Option<u32>) -> Result<Vec<String>> {
        let name = format!("Special:Whatlinkshere/{}", self.full_name());
        let mut url = self.wiki.page_url(&name, None, None)?;
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        let html = self.wiki.browser().get(url)?;
        Ok(query::link_titles(&html, "div#bodyContent"))
    }

    /// Names of the articles listed on this page's rendered view. For a
    /// category page this is the category membership.
    pub fn articles(&self) -> Result<Vec<String>> {
        let url = self.wiki.page_url(&self.full_name(), self.section, None)?;
        let html = self.wiki.browser().get(url)?;
        Ok(query::link_titles(&html, "div#bodyContent"))
    }

    /// The page's rendered view. For special pages only the region
    /// between the content markers is returned, without the
    /// surrounding skin chrome.
    pub fn rendered_content(&self) -> Result<String> {
        let url = self.wiki.page_url(&self.full_name(), self.section, None)?;
        let html = self.wiki.browser().get(url)?;
        Ok(match self.kind {
            PageKind::Special => query::content_region(&html).unwrap_or(&html).to_string(),
            PageKind::Article | PageKind::Category => html,
        })
    }
}
