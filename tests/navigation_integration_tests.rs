use std::cell::RefCell;
use std::rc::Rc;

use tabnav::core::{
    Action, BackOutcome, Effect, Extras, NavigationBuilder, NavigationController, NavigationError,
    RenderSink, Screen, ScreenId, TabId, Transition, update,
};

// ============================================================================
// Helpers
// ============================================================================

struct Page {
    id: ScreenId,
    name: &'static str,
    results: Vec<i32>,
}

impl Page {
    fn new(name: &'static str) -> Self {
        Self {
            id: ScreenId::new(),
            name,
            results: Vec::new(),
        }
    }
}

impl Screen for Page {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn on_result(&mut self, request_code: i32, _result_code: i32, _payload: Option<&Extras>) {
        self.results.push(request_code);
    }
}

/// Records rendered page names in order.
#[derive(Default)]
struct Log {
    rendered: Vec<(&'static str, Transition)>,
}

impl RenderSink<Page> for Log {
    fn render(&mut self, screen: &Page, transition: Transition) {
        self.rendered.push((screen.name, transition));
    }
}

fn three_tabs() -> NavigationController<Page, Log> {
    NavigationBuilder::new(Log::default())
        .register_tab("A", Page::new("a0"), "a")
        .register_tab("B", Page::new("b0"), "b")
        .register_tab("C", Page::new("c0"), "c")
        .build()
        .unwrap()
}

fn tab(id: &str) -> TabId {
    TabId::from(id)
}

// ============================================================================
// Build ordering
// ============================================================================

#[test]
fn test_build_leaves_first_declared_tab_active_and_visible() {
    let nav = three_tabs();
    assert_eq!(nav.active_tab(), Some(&tab("A")));
    assert_eq!(nav.current_screen().unwrap().name, "a0");
    // C's root went first, A's overwrote everything after it.
    assert_eq!(
        nav.renderer().rendered,
        vec![
            ("c0", Transition::None),
            ("b0", Transition::None),
            ("a0", Transition::None),
        ]
    );
}

// ============================================================================
// Stack depth bookkeeping
// ============================================================================

#[test]
fn test_depth_tracks_pushes_minus_successful_pops() {
    let mut nav = three_tabs();
    let mut pushes = 0;
    let mut pops = 0;
    let script = [true, true, false, true, false, false, false, true, false];
    for push in script {
        if push {
            nav.push(Page::new("x"), None).unwrap();
            pushes += 1;
        } else if nav.pop_screen().is_ok() {
            pops += 1;
        }
        let depth = nav.depth(&tab("A")).unwrap();
        assert!(depth >= 1);
        assert_eq!(depth, 1 + pushes - pops);
    }
}

#[test]
fn test_pop_at_depth_one_is_invalid() {
    let mut nav = three_tabs();
    assert_eq!(
        nav.pop_screen().unwrap_err(),
        NavigationError::InvalidPop {
            tab: tab("A"),
            depth: 1
        }
    );
}

#[test]
fn test_pop_yields_second_from_top() {
    let mut nav = three_tabs();
    nav.push(Page::new("a1"), None).unwrap();
    nav.push(Page::new("a2"), None).unwrap();
    nav.pop_screen().unwrap();
    assert_eq!(nav.current_screen().unwrap().name, "a1");
    assert_eq!(
        nav.renderer().rendered.last(),
        Some(&("a1", Transition::Backward))
    );
}

#[test]
fn test_push_then_pop_round_trip() {
    let mut nav = three_tabs();
    nav.push(Page::new("a1"), None).unwrap();
    let before = nav.current_screen().unwrap().id();
    let depth_before = nav.depth(&tab("A")).unwrap();

    nav.push_screen(&tab("A"), Page::new("a2"), true, true, None)
        .unwrap();
    nav.pop_screen().unwrap();

    assert_eq!(nav.current_screen().unwrap().id(), before);
    assert_eq!(nav.depth(&tab("A")).unwrap(), depth_before);
}

// ============================================================================
// Tab switching
// ============================================================================

#[test]
fn test_switch_tab_never_mutates_stacks() {
    let mut nav = three_tabs();
    nav.switch_tab(&tab("B")).unwrap();
    nav.push(Page::new("b1"), None).unwrap();
    let depths: Vec<_> = nav
        .tab_ids()
        .iter()
        .map(|t| nav.depth(t).unwrap())
        .collect();

    for id in ["C", "A", "B", "B", "C"] {
        nav.switch_tab(&tab(id)).unwrap();
        let now: Vec<_> = nav
            .tab_ids()
            .iter()
            .map(|t| nav.depth(t).unwrap())
            .collect();
        assert_eq!(now, depths);
    }
    assert_eq!(nav.current_screen().unwrap().name, "c0");
}

#[test]
fn test_tab_reveal_shows_prior_top() {
    let mut nav = three_tabs();
    nav.push(Page::new("a1"), None).unwrap();
    nav.on_tab_selected(&tab("C")).unwrap();
    nav.on_tab_selected(&tab("A")).unwrap();
    assert_eq!(
        nav.renderer().rendered.last(),
        Some(&("a1", Transition::None))
    );
}

#[test]
fn test_switch_to_unregistered_tab_fails() {
    let mut nav = three_tabs();
    assert_eq!(
        nav.switch_tab(&tab("Z")).unwrap_err(),
        NavigationError::UnregisteredTab(tab("Z"))
    );
}

// ============================================================================
// Back gesture
// ============================================================================

#[test]
fn test_back_at_root_exits_once_without_mutation() {
    let mut nav = three_tabs();
    let renders = nav.renderer().rendered.len();
    assert_eq!(nav.handle_back_gesture().unwrap(), BackOutcome::Exit);
    assert_eq!(nav.depth(&tab("A")).unwrap(), 1);
    assert_eq!(nav.renderer().rendered.len(), renders);
}

#[test]
fn test_back_when_deeper_matches_pop() {
    let mut nav = three_tabs();
    nav.push(Page::new("a1"), None).unwrap();
    let outcome = nav.handle_back_gesture().unwrap();
    let root = nav.current_screen().unwrap().id();
    assert_eq!(outcome, BackOutcome::Popped(root));
    assert_eq!(
        nav.renderer().rendered.last(),
        Some(&("a0", Transition::Backward))
    );
}

#[test]
fn test_back_uses_the_active_tab_only() {
    let mut nav = three_tabs();
    nav.push(Page::new("a1"), None).unwrap();
    nav.switch_tab(&tab("B")).unwrap();
    assert_eq!(nav.handle_back_gesture().unwrap(), BackOutcome::Exit);
    assert_eq!(nav.depth(&tab("A")).unwrap(), 2);
}

// ============================================================================
// External results
// ============================================================================

#[test]
fn test_external_result_targets_active_top_only() {
    let mut nav = three_tabs();
    nav.push(Page::new("a1"), None).unwrap();
    let renders = nav.renderer().rendered.len();
    assert!(nav.handle_external_result(11, 0, None).unwrap());
    assert_eq!(nav.current_screen().unwrap().results, vec![11]);
    assert_eq!(nav.renderer().rendered.len(), renders);
}

// ============================================================================
// Reducer
// ============================================================================

#[test]
fn test_reducer_drives_a_session() {
    let mut nav = three_tabs();
    let actions = vec![
        Action::Push {
            screen: Page::new("a1"),
            extras: None,
        },
        Action::TabSelected(tab("B")),
        Action::PushTo {
            tab: tab("B"),
            screen: Page::new("b1"),
            animate: false,
            add_to_stack: true,
            extras: None,
        },
        Action::Back,
        Action::SwitchTabIndex(0),
        Action::Back,
    ];
    for action in actions {
        assert_eq!(update(&mut nav, action).unwrap(), Effect::None);
    }
    assert_eq!(update(&mut nav, Action::Back).unwrap(), Effect::Exit);
    assert_eq!(nav.current_screen().unwrap().name, "a0");
}

#[test]
fn test_closure_sink() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = Rc::clone(&seen);
    let sink = move |page: &Page, transition: Transition| {
        sink_seen.borrow_mut().push((page.name, transition));
    };
    let mut nav = NavigationBuilder::new(sink)
        .register_tab("solo", Page::new("root"), "")
        .build()
        .unwrap();
    nav.push(Page::new("next"), None).unwrap();
    assert_eq!(
        *seen.borrow(),
        vec![("root", Transition::None), ("next", Transition::Forward)]
    );
}
