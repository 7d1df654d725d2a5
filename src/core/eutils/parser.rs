//! XML extraction for E-utilities responses
//!
//! Streaming `quick-xml` readers that pull the handful of fields the
//! gateway needs out of esearch, esummary and efetch documents.
//! Malformed documents surface as `GatewayError::InternalError`.

use crate::core::error::{GatewayError, Result};
use crate::core::types::{article_url, ArticleDetails, TITLE_PLACEHOLDER};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::reader::Reader;

/// One `DocSum` entry of an esummary response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub pmid: String,
    pub title: Option<String>,
}

/// Extract the ordered, de-duplicated `IdList/Id` values of an esearch
/// response, keeping at most `limit` of them.
///
/// An `ERROR` element with no identifiers is reported as an upstream
/// failure; zero identifiers otherwise is an empty result.
pub fn parse_search_ids(xml: &str, limit: usize) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut buffer = Vec::new();

    let mut ids: Vec<String> = Vec::new();
    let mut in_id_list = false;
    let mut current: Option<String> = None;
    let mut upstream_error: Option<String> = None;
    let mut in_error = false;

    loop {
        match reader.read_event_into(&mut buffer)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"IdList" => in_id_list = true,
                b"Id" if in_id_list => current = Some(String::new()),
                b"ERROR" => in_error = true,
                _ => {}
            },
            Event::Text(ref e) => {
                if let Some(id) = current.as_mut() {
                    id.push_str(&text_of(e));
                } else if in_error {
                    upstream_error
                        .get_or_insert_with(String::new)
                        .push_str(&text_of(e));
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"IdList" => in_id_list = false,
                b"Id" => {
                    if let Some(id) = current.take() {
                        let id = id.trim();
                        if !id.is_empty() && !ids.iter().any(|seen| seen == id) {
                            ids.push(id.to_string());
                        }
                    }
                }
                b"ERROR" => in_error = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }

        buffer.clear();
    }

    if ids.is_empty() {
        if let Some(message) = upstream_error {
            return Err(GatewayError::UpstreamFailure(format!(
                "esearch error: {}",
                message.trim()
            )));
        }
    }

    ids.truncate(limit);
    Ok(ids)
}

/// Extract `Id` and the `Title` item of every `DocSum` in an esummary
/// response, in document order.
pub fn parse_summaries(xml: &str) -> Result<Vec<SummaryRecord>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Field {
        Id,
        Title,
    }

    let mut reader = Reader::from_str(xml);
    let mut buffer = Vec::new();

    let mut records = Vec::new();
    let mut current: Option<SummaryRecord> = None;
    let mut capture: Option<(Field, String)> = None;

    loop {
        match reader.read_event_into(&mut buffer)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"DocSum" => {
                    current = Some(SummaryRecord {
                        pmid: String::new(),
                        title: None,
                    });
                }
                b"Id" if current.is_some() => capture = Some((Field::Id, String::new())),
                b"Item" if current.is_some() => {
                    if attribute(e, b"Name")?.as_deref() == Some("Title") {
                        capture = Some((Field::Title, String::new()));
                    }
                }
                _ => {}
            },
            Event::Text(ref e) => {
                if let Some((_, text)) = capture.as_mut() {
                    text.push_str(&text_of(e));
                }
            }
            Event::CData(e) => {
                if let Some((_, text)) = capture.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"Id" | b"Item" => {
                    if let (Some((field, text)), Some(record)) = (capture.take(), current.as_mut())
                    {
                        let text = collapse_whitespace(&text);
                        match field {
                            Field::Id => record.pmid = text,
                            Field::Title if !text.is_empty() => record.title = Some(text),
                            Field::Title => {}
                        }
                    }
                }
                b"DocSum" => {
                    if let Some(record) = current.take() {
                        if !record.pmid.is_empty() {
                            records.push(record);
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }

        buffer.clear();
    }

    Ok(records)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ArticleField {
    Pmid,
    Title,
    Abstract,
    CompletedYear,
    PubYear,
    MedlineDate,
    Journal,
    LastName,
    ForeName,
    CollectiveName,
}

struct Capture {
    field: ArticleField,
    depth: usize,
    text: String,
}

#[derive(Default)]
struct ArticleDraft {
    pmid: Option<String>,
    title: Option<String>,
    abstract_sections: Vec<String>,
    completed_year: Option<String>,
    pub_year: Option<String>,
    journal: Option<String>,
    authors: Vec<String>,
}

#[derive(Default)]
struct AuthorDraft {
    last_name: Option<String>,
    fore_name: Option<String>,
    collective_name: Option<String>,
}

impl AuthorDraft {
    fn display_name(self) -> Option<String> {
        match (self.fore_name, self.last_name, self.collective_name) {
            (Some(fore), Some(last), _) => Some(format!("{fore} {last}")),
            (None, Some(last), _) => Some(last),
            (_, None, Some(collective)) => Some(collective),
            _ => None,
        }
    }
}

/// Map the element path to the article field it carries
fn article_field(stack: &[String]) -> Option<ArticleField> {
    let parent_child = match stack {
        [.., parent, child] => (parent.as_str(), child.as_str()),
        _ => return None,
    };

    match parent_child {
        ("MedlineCitation", "PMID") | ("BookDocument", "PMID") => Some(ArticleField::Pmid),
        ("Article", "ArticleTitle") | ("BookDocument", "ArticleTitle") => {
            Some(ArticleField::Title)
        }
        ("Abstract", "AbstractText") => Some(ArticleField::Abstract),
        ("DateCompleted", "Year") => Some(ArticleField::CompletedYear),
        ("PubDate", "Year") => Some(ArticleField::PubYear),
        ("PubDate", "MedlineDate") => Some(ArticleField::MedlineDate),
        ("Journal", "Title") | ("Book", "BookTitle") => Some(ArticleField::Journal),
        ("Author", "LastName") => Some(ArticleField::LastName),
        ("Author", "ForeName") => Some(ArticleField::ForeName),
        ("Author", "CollectiveName") => Some(ArticleField::CollectiveName),
        _ => None,
    }
}

fn ends_with(stack: &[String], suffix: &[&str]) -> bool {
    stack.len() >= suffix.len()
        && stack[stack.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a == b)
}

fn is_record_root(stack: &[String]) -> bool {
    ends_with(stack, &["PubmedArticle"]) || ends_with(stack, &["PubmedBookArticle"])
}

/// Parse the first `PubmedArticle` or `PubmedBookArticle` of an efetch
/// response.
///
/// Book records take the book title as `journal`; the book's editors are
/// not listed as authors. Returns `Ok(None)` when the document holds no
/// record. `fallback_pmid` is used when the record carries no PMID.
pub fn parse_article(xml: &str, fallback_pmid: &str) -> Result<Option<ArticleDetails>> {
    let mut reader = Reader::from_str(xml);
    let mut buffer = Vec::new();

    let mut stack: Vec<String> = Vec::new();
    let mut draft: Option<ArticleDraft> = None;
    let mut author: Option<AuthorDraft> = None;
    let mut capture: Option<Capture> = None;
    let mut abstract_label: Option<String> = None;
    let mut finished = false;

    loop {
        match reader.read_event_into(&mut buffer)? {
            Event::Start(ref e) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());

                if draft.is_none() {
                    if is_record_root(&stack) {
                        draft = Some(ArticleDraft::default());
                    }
                } else if capture.is_none() {
                    if ends_with(&stack, &["AuthorList", "Author"])
                        && !ends_with(&stack, &["Book", "AuthorList", "Author"])
                    {
                        author = Some(AuthorDraft::default());
                    } else if let Some(field) = article_field(&stack) {
                        if field == ArticleField::Abstract {
                            abstract_label = attribute(e, b"Label")?;
                        }
                        capture = Some(Capture {
                            field,
                            depth: stack.len(),
                            text: String::new(),
                        });
                    }
                }
            }
            Event::Text(ref e) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&text_of(e));
                }
            }
            Event::CData(e) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                if capture.as_ref().is_some_and(|c| c.depth == stack.len()) {
                    if let (Some(c), Some(d)) = (capture.take(), draft.as_mut()) {
                        let text = collapse_whitespace(&c.text);
                        if !text.is_empty() {
                            apply_field(d, author.as_mut(), c.field, text, &mut abstract_label);
                        }
                    }
                } else if ends_with(&stack, &["AuthorList", "Author"]) {
                    if let (Some(a), Some(d)) = (author.take(), draft.as_mut()) {
                        if let Some(name) = a.display_name() {
                            d.authors.push(name);
                        }
                    }
                } else if draft.is_some() && is_record_root(&stack) {
                    finished = true;
                }

                stack.pop();
                if finished {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }

        buffer.clear();
    }

    Ok(draft.map(|d| {
        let pmid = d.pmid.unwrap_or_else(|| fallback_pmid.to_string());
        let url = article_url(&pmid);
        ArticleDetails {
            pmid,
            title: d.title.unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            abstract_text: if d.abstract_sections.is_empty() {
                None
            } else {
                Some(d.abstract_sections.join("\n\n"))
            },
            year: d.completed_year.or(d.pub_year),
            journal: d.journal,
            authors: d.authors,
            url,
        }
    }))
}

fn apply_field(
    draft: &mut ArticleDraft,
    author: Option<&mut AuthorDraft>,
    field: ArticleField,
    text: String,
    abstract_label: &mut Option<String>,
) {
    match field {
        ArticleField::Pmid => {
            draft.pmid.get_or_insert(text);
        }
        ArticleField::Title => draft.title = Some(text),
        ArticleField::Abstract => {
            let section = match abstract_label.take() {
                Some(label) => format!("{label}: {text}"),
                None => text,
            };
            draft.abstract_sections.push(section);
        }
        ArticleField::CompletedYear => draft.completed_year = Some(text),
        ArticleField::PubYear => draft.pub_year = Some(text),
        ArticleField::MedlineDate => {
            // e.g. "1998 Dec-1999 Jan"
            let year: String = text.chars().take(4).collect();
            if draft.pub_year.is_none() && year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())
            {
                draft.pub_year = Some(year);
            }
        }
        ArticleField::Journal => {
            draft.journal.get_or_insert(text);
        }
        ArticleField::LastName | ArticleField::ForeName | ArticleField::CollectiveName => {
            if let Some(a) = author {
                match field {
                    ArticleField::LastName => a.last_name = Some(text),
                    ArticleField::ForeName => a.fore_name = Some(text),
                    _ => a.collective_name = Some(text),
                }
            }
        }
    }
}

/// Unescaped text of a text event, falling back to the raw bytes for
/// entities quick-xml does not know
fn text_of(e: &BytesText<'_>) -> String {
    match e.unescape() {
        Ok(text) => text.into_owned(),
        Err(_) => String::from_utf8_lossy(&**e).into_owned(),
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().filter_map(|a| a.ok()) {
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
