use super::{PathTemplate, RouteDescriptor, Segment, TemplateError, Verb};
use http::Method;

#[test]
fn test_root_template() {
    let t = PathTemplate::parse("/").unwrap();
    assert!(t.segments().is_empty());
    assert_eq!(t.extension(), None);
    assert_eq!(t.to_string(), "/");
}

#[test]
fn test_parameterized_template() {
    let t = PathTemplate::parse("/cats/:id/owners/:owner_id").unwrap();
    assert_eq!(
        t.segments(),
        &[
            Segment::Literal("cats".into()),
            Segment::Param("id".into()),
            Segment::Literal("owners".into()),
            Segment::Param("owner_id".into()),
        ]
    );
    assert_eq!(t.dynamic_names().collect::<Vec<_>>(), vec!["id", "owner_id"]);
}

#[test]
fn test_fixed_extension() {
    let t = PathTemplate::parse("/api/:version/ping(.json)").unwrap();
    assert_eq!(t.extension(), Some(".json"));
    assert_eq!(t.to_string(), "/api/:version/ping(.json)");
}

#[test]
fn test_negotiable_format_has_no_extension() {
    let t = PathTemplate::parse("/ping(.:format)").unwrap();
    assert_eq!(t.extension(), None);
    assert_eq!(t.segments(), &[Segment::Literal("ping".into())]);
}

#[test]
fn test_wildcard_segment() {
    let t = PathTemplate::parse("/api/*path").unwrap();
    assert_eq!(t.segments()[1], Segment::Wildcard("path".into()));
    assert_eq!(t.dynamic_names().collect::<Vec<_>>(), vec!["path"]);
}

#[test]
fn test_repeated_slashes_are_collapsed() {
    let t = PathTemplate::parse("//cats///:id/").unwrap();
    assert_eq!(t.to_string(), "/cats/:id");
}

#[test]
fn test_rejects_malformed_templates() {
    assert!(matches!(
        PathTemplate::parse("/cats/:"),
        Err(TemplateError::EmptyParamName { .. })
    ));
    assert!(matches!(
        PathTemplate::parse("/cats/:id/toys/:id"),
        Err(TemplateError::DuplicateParam { name, .. }) if name == "id"
    ));
    assert!(matches!(
        PathTemplate::parse("/files/*path/raw"),
        Err(TemplateError::WildcardNotLast { .. })
    ));
    assert!(matches!(
        PathTemplate::parse("/cats(.json"),
        Err(TemplateError::MalformedFormat { .. })
    ));
    assert!(matches!(
        PathTemplate::parse("/cats(json)"),
        Err(TemplateError::MalformedFormat { .. })
    ));
}

#[test]
fn test_verb_parsing() {
    assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
    assert_eq!("ANY".parse::<Verb>().unwrap(), Verb::Any);
    assert!("BREW".parse::<Verb>().is_err());
    assert_eq!(Verb::try_from(&Method::DELETE).unwrap(), Verb::Delete);
    assert_eq!(Verb::Any.method(), None);
    assert_eq!(Verb::Patch.method(), Some(Method::PATCH));
    assert!(Verb::Get.accepts(&Method::GET));
    assert!(!Verb::Get.accepts(&Method::POST));
    assert!(Verb::Any.accepts(&Method::PUT));
}

#[test]
fn test_option_bindings() {
    let route = RouteDescriptor::new(Verb::Get, PathTemplate::parse("/:tenant/ping").unwrap())
        .with_option("tenant", "acme")
        .with_option("as", "ping");
    assert_eq!(route.option_binding("tenant").as_deref(), Some("acme"));
    assert_eq!(route.option_binding("as"), None);
    assert_eq!(route.explicit_name(), Some("ping"));
}
