//! Render-tree construction
//!
//! The dashboard sections are built as a plain value tree ([`Node`]) from
//! the immutable snapshot data, and emitted in a single separate step
//! (see [`html`]). Construction does no I/O, so the tree shapes are
//! testable without a browser or a filesystem.

pub mod html;
pub mod markdown;

use test262_dash_report::{SnapshotData, SuiteResult};

use crate::state::DashboardState;

/// Minimal HTML-shaped value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn elem(tag: &'static str, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            attrs: Vec::new(),
            children,
        }
    }

    pub fn with_attrs(
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            tag,
            attrs,
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Concatenated text content of the subtree, depth-first.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(s) => s.clone(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect::<Vec<_>>().join("")
            }
        }
    }

    /// Direct children with the given tag.
    pub fn children_with_tag(&self, wanted: &str) -> Vec<&Node> {
        match self {
            Node::Element { children, .. } => children
                .iter()
                .filter(|c| matches!(c, Node::Element { tag, .. } if *tag == wanted))
                .collect(),
            Node::Text(_) => Vec::new(),
        }
    }
}

/// Conformance percentage formatted to two decimals.
///
/// An empty snapshot formats as `NaN%`; the division is left unguarded
/// on purpose, matching the published dashboard.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// The summary list for a snapshot: commit link, the three raw counters,
/// the derived failed count, and the conformance percentage.
pub fn summary_list(repo: &str, snapshot: &SnapshotData) -> Node {
    let commit_url = format!("https://github.com/{}/commit/{}", repo, snapshot.commit);

    Node::elem(
        "ul",
        vec![
            Node::elem(
                "li",
                vec![
                    Node::text("Commit: "),
                    Node::with_attrs(
                        "a",
                        vec![("href", commit_url)],
                        vec![Node::text(snapshot.commit.clone())],
                    ),
                ],
            ),
            Node::elem("li", vec![Node::text(format!("Total tests: {}", snapshot.total))]),
            Node::elem("li", vec![Node::text(format!("Passed tests: {}", snapshot.passed))]),
            Node::elem("li", vec![Node::text(format!("Ignored tests: {}", snapshot.ignored))]),
            Node::elem("li", vec![Node::text(format!("Failed tests: {}", snapshot.failed()))]),
            Node::elem(
                "li",
                vec![Node::text(format!(
                    "Conformance: {}",
                    format_percent(snapshot.conformance())
                ))],
            ),
        ],
    )
}

/// The suite tree of a snapshot as nested unordered lists, depth-first,
/// source order preserved.
pub fn suite_tree(snapshot: &SnapshotData) -> Node {
    Node::elem("ul", snapshot.suites().iter().map(suite_item).collect())
}

fn suite_item(suite: &SuiteResult) -> Node {
    let mut children = vec![Node::text(format!(
        "{}: {} / {} / {} / {}",
        suite.name,
        suite.passed,
        suite.ignored,
        suite.failed(),
        suite.total,
    ))];

    if !suite.suites.is_empty() {
        children.push(Node::elem(
            "ul",
            suite.suites.iter().map(suite_item).collect(),
        ));
    }

    Node::elem("li", children)
}

/// The `master-latest` section: heading plus summary list from the last
/// history entry, and a link into the detailed results when the latest
/// snapshot is loaded. Without history data the section stays hidden.
pub fn latest_section(state: &DashboardState, repo: &str, branch: &str) -> Node {
    let Some(snapshot) = state.history_for(branch).and_then(|h| h.latest()) else {
        return Node::with_attrs(
            "section",
            vec![("id", "master-latest".to_string()), ("style", "display: none".to_string())],
            Vec::new(),
        );
    };

    let mut children = vec![
        Node::elem("h2", vec![Node::text(format!("Latest {branch} results"))]),
        summary_list(repo, snapshot),
    ];

    if state.snapshot_for(branch).is_some() {
        children.push(Node::with_attrs(
            "a",
            vec![("href", "#info".to_string())],
            vec![Node::text("Information")],
        ));
    }

    Node::with_attrs(
        "section",
        vec![("id", "master-latest".to_string())],
        children,
    )
}

/// The `info` section: the detailed suite tree for a tag, or an explicit
/// placeholder when that tag's snapshot never loaded.
pub fn info_section(state: &DashboardState, tag: &str) -> Node {
    match state.snapshot_for(tag) {
        Some(snapshot) => Node::with_attrs(
            "section",
            vec![("id", "info".to_string())],
            vec![
                Node::elem("h2", vec![Node::text(format!("Test suites ({tag})"))]),
                suite_tree(snapshot),
            ],
        ),
        None => Node::with_attrs(
            "section",
            vec![("id", "info".to_string()), ("style", "display: none".to_string())],
            vec![Node::elem(
                "p",
                vec![Node::text(format!("No data loaded for {tag}."))],
            )],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test262_dash_report::ResultsHistory;

    fn snapshot_with_one_suite() -> SnapshotData {
        SnapshotData::from_json(
            r#"{"results":{"suites":[
                {"name":"A","passed":2,"ignored":0,"total":3,"results":{}}
            ]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn suite_tree_renders_counters() {
        let tree = suite_tree(&snapshot_with_one_suite());

        let items = tree.children_with_tag("li");
        assert_eq!(items.len(), 1);
        let text = items[0].text_content();
        assert!(text.contains("A"));
        assert!(text.contains("2 / 0 / 1 / 3"));
    }

    #[test]
    fn nested_suites_render_as_nested_lists_in_source_order() {
        let snap = SnapshotData::from_json(
            r#"{"results":{"suites":[
                {"name":"language","passed":1,"ignored":0,"total":2,
                 "suites":[
                    {"name":"expressions","passed":1,"ignored":0,"total":1},
                    {"name":"statements","passed":0,"ignored":0,"total":1}
                 ]}
            ]}}"#,
        )
        .unwrap();

        let tree = suite_tree(&snap);
        let top = tree.children_with_tag("li");
        assert_eq!(top.len(), 1);

        let nested_lists = top[0].children_with_tag("ul");
        assert_eq!(nested_lists.len(), 1);

        let nested_items = nested_lists[0].children_with_tag("li");
        assert_eq!(nested_items.len(), 2);
        assert!(nested_items[0].text_content().starts_with("expressions"));
        assert!(nested_items[1].text_content().starts_with("statements"));
    }

    #[test]
    fn summary_list_has_six_entries() {
        let snap = SnapshotData {
            commit: "deadbeef".to_string(),
            total: 200,
            passed: 150,
            ignored: 10,
            results: None,
        };

        let list = summary_list("boa-dev/boa", &snap);
        let items = list.children_with_tag("li");
        assert_eq!(items.len(), 6);

        let text = list.text_content();
        assert!(text.contains("Total tests: 200"));
        assert!(text.contains("Failed tests: 40"));
        assert!(text.contains("Conformance: 75.00%"));

        // Commit entry links to the repository.
        let links = items[0].children_with_tag("a");
        assert_eq!(links.len(), 1);
        match links[0] {
            Node::Element { attrs, .. } => {
                assert_eq!(
                    attrs[0].1,
                    "https://github.com/boa-dev/boa/commit/deadbeef"
                );
            }
            Node::Text(_) => unreachable!(),
        }
    }

    #[test]
    fn empty_snapshot_formats_nan_without_panicking() {
        let list = summary_list("boa-dev/boa", &SnapshotData::default());
        assert!(list.text_content().contains("Conformance: NaN%"));
    }

    #[test]
    fn info_section_before_population_renders_placeholder() {
        let state = DashboardState::new();
        let section = info_section(&state, "master");
        assert!(section.text_content().contains("No data loaded for master."));
    }

    #[test]
    fn info_section_after_population_renders_suites() {
        let mut state = DashboardState::new();
        state.latest.insert("master".to_string(), snapshot_with_one_suite());

        let section = info_section(&state, "master");
        assert!(section.text_content().contains("A: 2 / 0 / 1 / 3"));
    }

    #[test]
    fn latest_section_hidden_without_history() {
        let state = DashboardState::new();
        let section = latest_section(&state, "boa-dev/boa", "master");
        match &section {
            Node::Element { attrs, children, .. } => {
                assert!(attrs.iter().any(|(k, v)| *k == "style" && v == "display: none"));
                assert!(children.is_empty());
            }
            Node::Text(_) => unreachable!(),
        }
    }

    #[test]
    fn latest_section_uses_last_history_entry() {
        let mut state = DashboardState::new();
        state.history.insert(
            "master".to_string(),
            ResultsHistory::from_json(
                r#"[
                    {"commit": "old", "total": 10, "passed": 1, "ignored": 0},
                    {"commit": "new", "total": 10, "passed": 9, "ignored": 0}
                ]"#,
            )
            .unwrap(),
        );

        let section = latest_section(&state, "boa-dev/boa", "master");
        let text = section.text_content();
        assert!(text.contains("new"));
        assert!(!text.contains("old"));
        // No latest snapshot loaded, so no info link.
        assert!(!text.contains("Information"));
    }

    #[test]
    fn latest_section_links_to_info_when_snapshot_loaded() {
        let mut state = DashboardState::new();
        state.history.insert(
            "master".to_string(),
            ResultsHistory::from_json(r#"[{"commit": "c", "total": 10, "passed": 9}]"#).unwrap(),
        );
        state.latest.insert("master".to_string(), snapshot_with_one_suite());

        let section = latest_section(&state, "boa-dev/boa", "master");
        assert!(section.text_content().contains("Information"));
    }
}
