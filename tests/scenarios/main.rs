use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rstest::rstest;
use toolbar_registry::{
    ActionKind, ActionSpec, NavigationEvent, NavigationSinks, ToolbarItem, ToolbarItemSpec,
    ToolbarManifest, ToolbarRegistry, VERSION, VisibilitySpec,
};

fn recording_registry() -> (ToolbarRegistry, Rc<RefCell<Vec<String>>>) {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let location_log = Rc::clone(&visited);
    let router_log = Rc::clone(&visited);
    let sinks = NavigationSinks::new(
        move |href: &str| location_log.borrow_mut().push(format!("location:{href}")),
        move |path: &str| router_log.borrow_mut().push(format!("router:{path}")),
    );
    (ToolbarRegistry::with_sinks(sinks), visited)
}

fn tags(items: &[ToolbarItem]) -> Vec<&str> {
    items.iter().map(ToolbarItem::tag).collect()
}

#[test]
fn scenarios_binary_smoke_runs() {
    assert!(!VERSION.is_empty());
}

#[test]
fn pinned_items_survive_page_navigation() {
    let (mut registry, _) = recording_registry();
    registry.add_pinned_item(ToolbarItemSpec::new("home", "Home").visible(true).order(0));
    registry.add_pinned_item(ToolbarItemSpec::new("help", "Help").visible(true).order(99));

    // first page
    registry.add_item(ToolbarItemSpec::new("save", "Save").visible(true).order(10));
    registry.add_item(ToolbarItemSpec::divider("sep").order(11));
    assert_eq!(tags(registry.items()), vec!["home", "save", "sep", "help"]);

    registry.handle_navigation_event(NavigationEvent::Start);
    registry.add_item(ToolbarItemSpec::new("print", "Print").visible(true).order(50));
    registry.handle_navigation_event(NavigationEvent::Success);

    assert_eq!(tags(registry.items()), vec!["home", "print", "help"]);
}

#[test]
fn every_change_fans_out_to_every_listener() {
    let (mut registry, _) = recording_registry();
    let renderer = Rc::new(Cell::new(0));
    let breadcrumbs = Rc::new(Cell::new(0));
    for counter in [&renderer, &breadcrumbs] {
        let counter = Rc::clone(counter);
        registry.on_update(move |_| counter.set(counter.get() + 1));
    }

    registry.add_item(ToolbarItemSpec::new("a", "A"));
    registry.add_pinned_item(ToolbarItemSpec::new("b", "B"));
    registry.handle_navigation_event(NavigationEvent::Start);
    registry.handle_navigation_event(NavigationEvent::Success);

    assert_eq!(renderer.get(), 3);
    assert_eq!(breadcrumbs.get(), 3);
    assert_eq!(registry.event_bus().published_count(), 3);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let (mut registry, _) = recording_registry();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = registry.on_update(move |_| counter.set(counter.get() + 1));

    registry.add_item(ToolbarItemSpec::new("a", "A"));
    assert!(registry.unsubscribe(id));
    registry.add_item(ToolbarItemSpec::new("b", "B"));

    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case("https://example.org", "location:https://example.org")]
#[case("ref:/reports/7", "location:/reports/7")]
#[case("/settings", "router:/settings")]
fn nested_item_action_reaches_the_right_sink(#[case] descriptor: &str, #[case] expected: &str) {
    let (mut registry, visited) = recording_registry();
    registry.add_item(ToolbarItemSpec::new("menu", "Menu").visible(true));
    registry.add_item(
        ToolbarItemSpec::new("entry", "Entry")
            .parent("menu")
            .action(descriptor),
    );

    let execution = registry.perform_action("entry", Some("menu"));

    assert!(execution.succeeded);
    assert_eq!(*visited.borrow(), vec![expected.to_string()]);
}

#[test]
fn renderer_sees_only_visible_items() {
    let (mut registry, _) = recording_registry();
    let admin = Rc::new(Cell::new(false));
    let is_admin = Rc::clone(&admin);
    registry.on_visibility_check(move |item| item.tag() != "admin" || is_admin.get());

    let rendered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rendered);
    registry.on_update(move |snapshot| {
        let visible: Vec<String> = snapshot
            .visible_items()
            .into_iter()
            .map(|item| item.tag().to_string())
            .collect();
        *sink.borrow_mut() = visible;
    });

    registry.add_item(ToolbarItemSpec::new("hidden", "Hidden"));
    registry.add_item(
        ToolbarItemSpec::new("admin", "Admin").visible(VisibilitySpec::delegated("admin")),
    );
    registry.add_item(
        ToolbarItemSpec::new("toggle", "Toggle").visible(VisibilitySpec::predicate(|| true)),
    );
    assert_eq!(*rendered.borrow(), vec!["toggle"]);

    admin.set(true);
    registry.handle_navigation_event(NavigationEvent::Success);
    assert_eq!(*rendered.borrow(), vec!["admin", "toggle"]);
}

#[test]
fn callback_action_mutates_registry_after_borrow() {
    let registry = Rc::new(RefCell::new(ToolbarRegistry::default()));
    let handle = Rc::clone(&registry);
    registry.borrow_mut().add_item(
        ToolbarItemSpec::new("more", "More").action(ActionSpec::callback(move || {
            handle
                .borrow_mut()
                .add_item(ToolbarItemSpec::new("extra", "Extra").order(1));
        })),
    );

    let action = registry.borrow().action_for("more");
    let execution = action.map(|action| action.execute(&NavigationSinks::detached()));

    assert_eq!(execution.map(|execution| execution.kind), Some(ActionKind::Callback));
    assert_eq!(tags(registry.borrow().items()), vec!["more", "extra"]);
}

#[test]
fn manifest_seeds_registry_and_pins_survive() {
    let manifest = ToolbarManifest::from_toml_str(
        r#"
[[pinned]]
tag = "home"
name = "Home"
visible = true
action = "/"

[[item]]
tag = "docs"
name = "Docs"
visible = true
action = "https://docs.example.org"
order = 5
"#,
    )
    .unwrap();
    let (mut registry, visited) = recording_registry();

    manifest.apply(&mut registry);
    registry.perform_action("docs", None);
    registry.handle_navigation_event(NavigationEvent::Start);
    registry.perform_action("home", None);

    assert_eq!(tags(registry.items()), vec!["home"]);
    assert_eq!(
        *visited.borrow(),
        vec!["location:https://docs.example.org", "router:/"]
    );
}

#[test]
fn navigation_events_cross_threads_through_channel() {
    let (mut registry, _) = recording_registry();
    registry.add_pinned_item(ToolbarItemSpec::new("home", "Home"));
    registry.add_item(ToolbarItemSpec::new("page", "Page"));
    let (sender, receiver) = crossbeam_channel::unbounded();

    std::thread::spawn(move || {
        sender.send(NavigationEvent::Start).unwrap();
        sender.send(NavigationEvent::Success).unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(registry.pump_navigation_events(&receiver), 2);
    assert_eq!(tags(registry.items()), vec!["home"]);
}
