//! End-to-end browsing scenarios through the public API.

use kplite_core::{
    flatten, Entry, Geometry, Indicator, Input, Navigator, Options, RawGroup, SearchKind,
    SearchStatus, StatusLine, Tree,
};

const GEOMETRY: Geometry = Geometry {
    group_rows: 10,
    entry_rows: 20,
};

fn banking_tree() -> Tree {
    Tree::build(vec![
        RawGroup::new("Banking").with_entry(Entry::new("Bank A", "u1", "p1", "", "")),
        RawGroup::new("Email"),
    ])
}

fn names(nav: &Navigator) -> Vec<String> {
    flatten(nav.tree())
        .iter()
        .map(|item| nav.tree().group(item.group).name().to_string())
        .collect()
}

fn search(nav: &mut Navigator, kind: SearchKind, query: &str) {
    nav.apply(Input::EnterSearch(kind), GEOMETRY);
    for c in query.chars() {
        nav.apply(Input::SearchChar(c), GEOMETRY);
    }
    nav.apply(Input::SubmitSearch, GEOMETRY);
}

#[test]
fn initial_flattening_shows_root_children() {
    let nav = Navigator::new(banking_tree(), Options::default());
    assert_eq!(names(&nav), ["Root", "Banking", "Email"]);
    let depths: Vec<usize> = flatten(nav.tree()).iter().map(|i| i.depth).collect();
    assert_eq!(depths, [0, 1, 1]);
}

#[test]
fn expanding_leaf_group_shows_masked_entry() {
    let mut nav = Navigator::new(banking_tree(), Options::default());
    nav.apply(Input::Down, GEOMETRY);
    nav.apply(Input::ToggleExpand, GEOMETRY);
    assert_eq!(names(&nav), ["Root", "Banking", "Email"]);

    let view = nav.view(GEOMETRY);
    assert_eq!(view.groups.rows[1].indicator, Indicator::Leaf);
    assert_eq!(view.entries.rows.len(), 1);
    assert_eq!(view.entries.rows[0].title, "Bank A");
    assert_eq!(view.entries.rows[0].password, "*".repeat("p1".len()));

    nav.apply(Input::TogglePasswordVisibility, GEOMETRY);
    assert_eq!(nav.view(GEOMETRY).entries.rows[0].password, "p1");
}

#[test]
fn search_bank_selects_banking() {
    let mut nav = Navigator::new(banking_tree(), Options::default());
    search(&mut nav, SearchKind::GroupName, "bank");
    assert_eq!(nav.state().selected, 1);
    assert_eq!(nav.state().status, SearchStatus::Found);
    assert!(nav.tree().group(nav.tree().root()).is_expanded());
}

#[test]
fn search_zzz_is_distinct_from_no_query() {
    let mut nav = Navigator::new(banking_tree(), Options::default());
    let flags = |nav: &Navigator| -> Vec<bool> {
        nav.tree()
            .preorder()
            .map(|id| nav.tree().group(id).is_expanded())
            .collect()
    };
    let before = flags(&nav);
    assert_eq!(nav.view(GEOMETRY).status, StatusLine::Idle);

    search(&mut nav, SearchKind::GroupName, "zzz");
    assert_eq!(flags(&nav), before);
    assert_eq!(nav.view(GEOMETRY).status, StatusLine::NotFound);
}

#[test]
fn deep_match_is_revealed() {
    let tree = Tree::build(vec![RawGroup::new("Passwords").with_group(
        RawGroup::new("Work").with_group(
            RawGroup::new("Servers")
                .with_group(RawGroup::new("Databases").with_entry(Entry::new(
                    "postgres",
                    "admin",
                    "s3cret",
                    "db.internal",
                    "",
                ))),
        ),
    )]);
    let mut nav = Navigator::new(tree, Options::default());
    assert_eq!(names(&nav), ["Root", "Passwords"]);

    search(&mut nav, SearchKind::Content, "DB.INTERNAL");
    assert_eq!(
        names(&nav),
        ["Root", "Passwords", "Work", "Servers", "Databases"]
    );
    assert_eq!(nav.state().selected, 4);
    assert_eq!(nav.view(GEOMETRY).entry_title, "Databases");
    // the match itself stays collapsed
    let selected = nav.selected_group();
    assert!(!nav.tree().group(selected).is_expanded());
}

#[test]
fn down_at_last_index_is_stable() {
    let mut nav = Navigator::new(banking_tree(), Options::default());
    for _ in 0..50 {
        nav.apply(Input::Down, GEOMETRY);
    }
    assert_eq!(nav.state().selected, 2);
    assert_eq!(nav.state().group_scroll, 0);
}

#[test]
fn empty_vault_is_browsable() {
    let mut nav = Navigator::new(Tree::build(Vec::new()), Options::default());
    for input in [
        Input::Down,
        Input::Up,
        Input::Bottom,
        Input::ToggleExpandAll,
        Input::ToggleExpandAll,
        Input::FocusRight,
        Input::Down,
        Input::Bottom,
    ] {
        nav.apply(input, GEOMETRY);
    }
    search(&mut nav, SearchKind::Content, "anything");

    let view = nav.view(GEOMETRY);
    assert_eq!(view.groups.rows.len(), 1);
    assert!(view.entries.rows.is_empty());
    assert_eq!(view.status, StatusLine::NotFound);
}

#[test]
fn hidden_groups_never_reach_the_tree() {
    let raw = RawGroup::new("Passwords")
        .with_group(RawGroup::new("Banking"))
        .with_group(RawGroup::new("Recycle Bin"));
    let tree = Tree::build(vec![raw.without_hidden(&["Recycle Bin".to_string()])]);
    let names: Vec<&str> = tree.preorder().map(|id| tree.group(id).name()).collect();
    assert_eq!(names, ["Root", "Passwords", "Banking"]);
}
