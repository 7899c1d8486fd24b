//! Comprehensive tests for bookmarks-tree
//!
//! Real Netscape markup through parse, extract, build and serialize.

use bookmarks_tree::{
    convert, parse_tree, to_json, Config, Extractor, OutputConfig, TreeBuilder,
};
use serde_json::{json, Value};

const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="1634454300" LAST_MODIFIED="1634454400">Root</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1634454300">Rust</A>
        <DT><A HREF="https://crates.io/">crates.io</A>
        <DT><H3 ADD_DATE="1634454300">Sub</H3>
        <DL><p>
            <DT><A HREF="https://docs.rs/" LAST_MODIFIED="1634454360">docs.rs</A>
        </DL><p>
    </DL><p>
</DL><p>
"#;

fn convert_value(html: &str, config: &Config) -> Value {
    let json = convert(html.as_bytes(), config).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_well_formed_round_trip() {
    let built = parse_tree(EXPORT.as_bytes(), "bookmarks.html", &Config::default()).unwrap();
    let root = &built.root;

    assert_eq!(root.title, "Root");
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.children[0].title, "Rust");
    assert_eq!(root.children[1].title, "crates.io");

    let sub = &root.children[2];
    assert_eq!(sub.title, "Sub");
    assert!(sub.is_folder());
    assert_eq!(sub.children.len(), 1);
    assert_eq!(sub.children[0].url.as_deref(), Some("https://docs.rs/"));

    assert!(built.report.unreachable.is_empty());
    assert!(built.report.merged.is_empty());
}

#[test]
fn test_serialized_shape() {
    let value = convert_value(EXPORT, &Config::default());
    assert_eq!(
        value,
        json!({
            "title": "Root",
            "bookmarks": [
                {
                    "title": "Rust",
                    "url": "https://www.rust-lang.org/",
                    "addAt": "2021-10-17T07:05:00Z"
                },
                { "title": "crates.io", "url": "https://crates.io/" },
                {
                    "title": "Sub",
                    "bookmarks": [
                        {
                            "title": "docs.rs",
                            "url": "https://docs.rs/",
                            "updateAt": "2021-10-17T07:06:00Z"
                        }
                    ],
                    "addAt": "2021-10-17T07:05:00Z"
                }
            ],
            "addAt": "2021-10-17T07:05:00Z",
            "updateAt": "2021-10-17T07:06:40Z"
        })
    );
}

#[test]
fn test_timestamp_in_local_offset() {
    let offset = chrono::FixedOffset::east_opt(8 * 3600).unwrap();
    let value = convert_value(EXPORT, &Config::default().with_utc_offset(offset));
    assert_eq!(value["bookmarks"][0]["addAt"], "2021-10-17T15:05:00+08:00");
    assert!(value["bookmarks"][1].get("addAt").is_none());
}

#[test]
fn test_idempotent_output() {
    let first = convert(EXPORT.as_bytes(), &Config::default()).unwrap();
    let second = convert(EXPORT.as_bytes(), &Config::default()).unwrap();
    assert_eq!(first, second);

    let pretty = Config::default().pretty();
    assert_eq!(
        convert(EXPORT.as_bytes(), &pretty).unwrap(),
        convert(EXPORT.as_bytes(), &pretty).unwrap()
    );
}

#[test]
fn test_duplicate_titles_merge() {
    let html = r#"<DL><p>
        <DT><H3>Root</H3>
        <DL><p>
            <DT><H3>Work</H3>
            <DL><p><DT><A HREF="https://one.example/">one</A></DL><p>
            <DT><H3>Work</H3>
            <DL><p><DT><A HREF="https://two.example/">two</A></DL><p>
        </DL><p>
    </DL>"#;

    let built = parse_tree(html.as_bytes(), "dup.html", &Config::default()).unwrap();
    let work: Vec<_> = built.root.iter().filter(|n| n.title == "Work").collect();
    assert_eq!(work.len(), 1);

    let links: Vec<_> = work[0].children.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(links, ["one", "two"]);
    assert_eq!(built.report.merged.len(), 1);
}

#[test]
fn test_duplicate_titles_strict() {
    let html = r#"<DL><p><DT><H3>Root</H3><DL><p>
        <DT><H3>Work</H3><DL><p></DL><p>
        <DT><H3>Work</H3><DL><p></DL><p>
    </DL></DL>"#;

    let err = parse_tree(html.as_bytes(), "dup.html", &Config::default().strict()).unwrap_err();
    assert_eq!(err.to_string(), r#"Duplicate folder title: "Work""#);
}

#[test]
fn test_root_heading_collects_top_level_folders() {
    let html = r#"<H1>Bookmarks</H1>
    <DL><p>
        <DT><A HREF="https://top.example/">Top</A>
        <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bookmarks bar</H3>
        <DL><p><DT><A HREF="https://bar.example/">bar</A></DL><p>
        <DT><H3>Other bookmarks</H3>
        <DL><p></DL><p>
    </DL><p>"#;

    let default = parse_tree(html.as_bytes(), "x.html", &Config::default()).unwrap();
    assert_eq!(default.root.title, "Bookmarks bar");
    assert_eq!(default.report.extra_roots.len(), 1);

    let built = parse_tree(html.as_bytes(), "x.html", &Config::default().with_root_heading()).unwrap();
    let titles: Vec<_> = built.root.children.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(built.root.title, "Bookmarks");
    assert_eq!(titles, ["Top", "Bookmarks bar", "Other bookmarks"]);
}

#[test]
fn test_stages_compose() {
    let doc = bookmarks_tree::html::parse(EXPORT);
    let records = Extractor::default().extract(&doc);
    assert_eq!(records.len(), 2);

    let built = TreeBuilder::default().build(records).unwrap();
    let json = to_json(&built.root, &OutputConfig::default()).unwrap();
    assert_eq!(json, convert(EXPORT.as_bytes(), &Config::default()).unwrap());
}
