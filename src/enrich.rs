//! Best-effort director scraping from per-film public pages.
//!
//! One blocking GET per film, parsed with a lenient event scan. Every failure
//! mode (network, status, markup, missing elements) degrades to empty fields;
//! nothing here can abort a run.

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use reqwest::blocking::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Class marking the page element that wraps director credits.
const DIRECTOR_CONTAINER_CLASS: &str = "film-directors";
/// Class of the biography element inside the container.
const BIOGRAPHY_CLASS: &str = "biography";

/// Director fields extracted from a film page. Empty strings when the page
/// does not carry them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectorProfile {
    pub name: String,
    pub biography: String,
}

/// Outcome of one enrichment attempt; the call site decides the fallback.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(DirectorProfile),
    Failed { reason: String },
}

/// Fetches and parses film pages, memoizing one profile per film id per run.
/// A failed fetch memoizes an empty profile, so it is never retried.
pub struct DirectorEnricher {
    client: Client,
    base_url: String,
    memo: AHashMap<String, DirectorProfile>,
}

impl DirectorEnricher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            memo: AHashMap::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn profile_for(&mut self, film_id: &str, url_path: &str) -> FetchOutcome {
        if let Some(hit) = self.memo.get(film_id) {
            return FetchOutcome::Fetched(hit.clone());
        }
        match self.fetch(url_path) {
            Ok(profile) => {
                self.memo.insert(film_id.to_owned(), profile.clone());
                FetchOutcome::Fetched(profile)
            }
            Err(err) => {
                self.memo.insert(film_id.to_owned(), DirectorProfile::default());
                FetchOutcome::Failed {
                    reason: format!("{err:#}"),
                }
            }
        }
    }

    fn fetch(&self, url_path: &str) -> Result<DirectorProfile> {
        let url = absolute_url(&self.base_url, url_path);
        let resp = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("{status} for {url}");
        }
        let body = resp.text().with_context(|| format!("reading {url}"))?;
        Ok(parse_director_page(&body))
    }
}

/// Join the fixed site base with a film's localized path, with exactly one
/// slash at the seam.
pub fn absolute_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Scan a film page for the director container; its first heading is the
/// name, its `biography`-classed element is the text. Missing pieces yield
/// empty strings; scan errors keep whatever was extracted so far.
pub fn parse_director_page(html: &str) -> DirectorProfile {
    let mut reader = Reader::from_str(html);
    reader.config_mut().check_end_names = false;
    let mut buf = Vec::new();

    let mut container_tag: Option<Vec<u8>> = None;
    let mut container_nest = 0usize;
    let mut name: Option<String> = None;
    let mut name_tag: Option<Vec<u8>> = None;
    let mut name_buf = String::new();
    let mut bio: Option<String> = None;
    let mut bio_tag: Option<Vec<u8>> = None;
    let mut bio_nest = 0usize;
    let mut bio_buf = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let tag = e.name().as_ref().to_vec();
                match &container_tag {
                    None => {
                        if class_contains(&e, DIRECTOR_CONTAINER_CLASS) {
                            container_tag = Some(tag);
                            container_nest = 0;
                        }
                    }
                    Some(ct) => {
                        if *ct == tag {
                            container_nest += 1;
                        }
                        if let Some(bt) = &bio_tag {
                            if *bt == tag {
                                bio_nest += 1;
                            }
                        } else if bio.is_none() && class_contains(&e, BIOGRAPHY_CLASS) {
                            bio_tag = Some(tag.clone());
                            bio_nest = 0;
                            bio_buf.clear();
                        }
                        if name.is_none() && name_tag.is_none() && is_heading(&tag) {
                            name_tag = Some(tag);
                            name_buf.clear();
                        }
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let Ok(text) = t.unescape() {
                    if name_tag.is_some() {
                        name_buf.push_str(&text);
                        name_buf.push(' ');
                    } else if bio_tag.is_some() {
                        bio_buf.push_str(&text);
                        bio_buf.push(' ');
                    }
                }
            }
            Ok(Event::End(e)) => {
                let tag = e.name().as_ref().to_vec();
                if name_tag.as_deref() == Some(tag.as_slice()) {
                    name = Some(squeeze_ws(&name_buf));
                    name_tag = None;
                }
                if bio_tag.as_deref() == Some(tag.as_slice()) {
                    if bio_nest > 0 {
                        bio_nest -= 1;
                    } else {
                        bio = Some(squeeze_ws(&bio_buf));
                        bio_tag = None;
                    }
                }
                if container_tag.as_deref() == Some(tag.as_slice()) {
                    if container_nest > 0 {
                        container_nest -= 1;
                    } else {
                        break;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    DirectorProfile {
        name: name.unwrap_or_default(),
        biography: bio.unwrap_or_default(),
    }
}

fn is_heading(tag: &[u8]) -> bool {
    matches!(tag, [b'h', b'1'..=b'6'])
}

fn class_contains(e: &BytesStart, needle: &str) -> bool {
    match e.try_get_attribute("class") {
        Ok(Some(attr)) => match attr.unescape_value() {
            Ok(value) => value
                .split_whitespace()
                .any(|c| c.eq_ignore_ascii_case(needle)),
            Err(_) => false,
        },
        _ => false,
    }
}

fn squeeze_ws(s: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let re = WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(s.trim(), " ").into_owned()
}
