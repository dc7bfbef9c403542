use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use apexdoc::{app, ApexDocError, EntityKind, Mode, Opener, QueryPath, Resolver, ResolverSettings};
use serde_json::json;

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl Opener for RecordingOpener {
    fn open(&self, url: &str) -> apexdoc::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

fn write_toc(dir: &Path) -> PathBuf {
    let toc = json!({
        "toc": [{
            "id": "apex_dev_guide",
            "children": [{
                "id": "apex_reference",
                "text": "Reference",
                "children": [{
                    "text": "System",
                    "children": [{
                        "text": "List Class",
                        "a_attr": { "href": "apex_methods_system_list.htm" },
                        "children": [{
                            "text": "Methods",
                            "children": [
                                { "text": "add(Object)", "a_attr": { "href": "apex_methods_system_list.htm#add_1" } },
                                { "text": "add(Integer, Object)", "a_attr": { "href": "apex_methods_system_list.htm#add_2" } },
                                { "text": "size()", "a_attr": { "href": "apex_methods_system_list.htm#size" } }
                            ]
                        }]
                    }]
                }]
            }]
        }]
    });
    let path = dir.join("apexdoc.json");
    fs::write(&path, serde_json::to_string_pretty(&toc).unwrap()).unwrap();
    path
}

fn settings() -> ResolverSettings {
    ResolverSettings {
        base_url: "https://docs.example.com/apex/".to_string(),
        ..Default::default()
    }
}

fn run(resolver: &Resolver, raw: &str, mode: Mode, opener: &RecordingOpener) -> apexdoc::Result<String> {
    let path: QueryPath = raw.parse()?;
    let mut out = Vec::new();
    app::run(resolver, &path, mode, &mut out, opener)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_qualified_method_resolves_to_first_overload() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = Resolver::load(&write_toc(dir.path()), settings()).unwrap();

    let resolved = resolver.resolve(&"System.List.add".parse().unwrap()).unwrap();
    assert_eq!(resolved.node.name(), "add(Object)");

    let opener = RecordingOpener::default();
    run(&resolver, "System.List.add", Mode::Open, &opener).unwrap();
    assert_eq!(
        *opener.opened.borrow(),
        vec!["https://docs.example.com/apex/apex_methods_system_list.htm#add_1"]
    );
}

#[test]
fn test_list_methods_for_namespace_and_class() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = Resolver::load(&write_toc(dir.path()), settings()).unwrap();
    let opener = RecordingOpener::default();

    let out = run(&resolver, "System.List", Mode::ListMethods, &opener).unwrap();
    assert_eq!(out, "add(Object)\nadd(Integer, Object)\nsize()\n");
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn test_class_only_path_shows_url() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = Resolver::load(&write_toc(dir.path()), settings()).unwrap();
    let opener = RecordingOpener::default();

    let out = run(&resolver, "list", Mode::ShowUrl, &opener).unwrap();
    assert_eq!(out, "https://docs.example.com/apex/apex_methods_system_list.htm\n");
}

#[test]
fn test_absent_entries_are_reported_not_crashed() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = Resolver::load(&write_toc(dir.path()), settings()).unwrap();
    let opener = RecordingOpener::default();

    assert!(resolver.namespace("DoesNotExist").is_none());

    let err = run(&resolver, "DoesNotExist.List.add", Mode::Open, &opener).unwrap_err();
    assert!(matches!(err, ApexDocError::NotFound { kind: EntityKind::Namespace, .. }));

    let err = run(&resolver, "System.List.remove", Mode::Open, &opener).unwrap_err();
    assert!(matches!(err, ApexDocError::NotFound { kind: EntityKind::Member, .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn test_input_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = Resolver::load(&dir.path().join("missing.json"), settings()).err().unwrap();
    assert!(matches!(err, ApexDocError::Read { .. }));
    assert_eq!(err.exit_code(), 2);

    let toc = write_toc(dir.path());
    let other_root = ResolverSettings {
        reference_root_id: "apex_other".to_string(),
        ..settings()
    };
    let err = Resolver::load(&toc, other_root).err().unwrap();
    assert!(matches!(err, ApexDocError::MissingReferenceRoot(_)));
}

#[test]
fn test_published_fixture_loads() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/apexdoc.json");
    let resolver = Resolver::load(&fixture, ResolverSettings::default()).unwrap();

    let token = resolver.resolve(&"Auth.AuthToken.getAccessToken".parse().unwrap()).unwrap();
    assert_eq!(
        resolver.absolute_url(token.node).unwrap(),
        "https://developer.salesforce.com/docs/atlas.en-us.apexcode.meta/apexcode/apex_class_Auth_AuthToken.htm#getAccessToken"
    );
}
