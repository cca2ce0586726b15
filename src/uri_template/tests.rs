use super::*;

#[test]
fn query_parameters() {
    let vars = Variables::new().add("rows", 1).add("page", 2);
    assert_eq!(
        expand("/dns/soa{?rows,page}", &vars).unwrap(),
        "/dns/soa?rows=1&page=2"
    );

    let vars = Variables::new().add("page", 3);
    assert_eq!(
        expand("/dns/soa{?rows,page}", &vars).unwrap(),
        "/dns/soa?page=3"
    );
}

#[test]
fn omitted_parameters_are_dropped() {
    let vars = Variables::new()
        .add_if_some("rows", None::<u32>)
        .add_if_some("page", None::<u32>);
    assert!(vars.is_empty());
    assert_eq!(
        expand("/dns/transferAcl{?rows,page}", &vars).unwrap(),
        "/dns/transferAcl"
    );

    let vars = Variables::new()
        .add_if_some("rows", None::<u32>)
        .add_if_some("page", Some(4));
    let expanded = expand("/dns/transferAcl{?rows,page}", &vars).unwrap();
    assert_eq!(expanded, "/dns/transferAcl?page=4");
    assert!(!expanded.contains("rows"));

    let vars = Variables::new().add_list("ids", Vec::<i64>::new());
    assert_eq!(
        expand("/dns/managed/1/records{?ids*}", &vars).unwrap(),
        "/dns/managed/1/records"
    );
}

#[test]
fn empty_values_are_kept() {
    let vars = Variables::new().add("recordName", "");
    assert_eq!(
        expand("/records{?recordName}", &vars).unwrap(),
        "/records?recordName="
    );
    assert_eq!(expand("/records{;recordName}", &vars).unwrap(), "/records;recordName");
}

#[test]
fn query_continuation() {
    let vars = Variables::new().add("type", "A").add("recordName", "www");
    assert_eq!(
        expand("/records?rows=5{&type,recordName}", &vars).unwrap(),
        "/records?rows=5&type=A&recordName=www"
    );
}

#[test]
fn simple_and_path_expansion() {
    let vars = Variables::new()
        .add("id", 1119443)
        .add("name", "hello world/x")
        .add_list("path", ["2024", "05"]);
    assert_eq!(
        expand("/dns/managed/{id}/records", &vars).unwrap(),
        "/dns/managed/1119443/records"
    );
    assert_eq!(expand("/q/{name}", &vars).unwrap(), "/q/hello%20world%2Fx");
    assert_eq!(expand("/q{/path*}", &vars).unwrap(), "/q/2024/05");
    assert_eq!(expand("/q{/path}", &vars).unwrap(), "/q/2024,05");
}

#[test]
fn reserved_expansion() {
    let vars = Variables::new().add("base", "/dns/managed?x=1 2");
    assert_eq!(expand("{+base}", &vars).unwrap(), "/dns/managed?x=1%202");
    assert_eq!(expand("{base}", &vars).unwrap(), "%2Fdns%2Fmanaged%3Fx%3D1%202");
    assert_eq!(expand("{#base}", &vars).unwrap(), "#/dns/managed?x=1%202");
}

#[test]
fn exploded_lists() {
    let vars = Variables::new().add_list("ids", [1, 2, 3]);
    assert_eq!(
        expand("/records{?ids*}", &vars).unwrap(),
        "/records?ids=1&ids=2&ids=3"
    );
    assert_eq!(expand("/records{?ids}", &vars).unwrap(), "/records?ids=1,2,3");
    assert_eq!(expand("{.ids*}", &vars).unwrap(), ".1.2.3");
}

#[test]
fn prefix_modifier() {
    let vars = Variables::new().add("name", "example.com");
    assert_eq!(expand("{name:7}", &vars).unwrap(), "example");
    assert_eq!(expand("{?name:3}", &vars).unwrap(), "?name=exa");
}

#[test]
fn values_are_encoded() {
    let vars = Variables::new().add("domainname", "exämple.com&x=1");
    assert_eq!(
        expand("/dns/managed/name{?domainname}", &vars).unwrap(),
        "/dns/managed/name?domainname=ex%C3%A4mple.com%26x%3D1"
    );
}

#[test]
fn malformed_templates() {
    let vars = Variables::new();
    assert_eq!(
        expand("/dns/soa{?rows", &vars),
        Err(TemplateError::Unclosed {
            template: "/dns/soa{?rows".to_string(),
            position: 8,
        })
    );
    assert_eq!(
        expand("/a/{}", &vars),
        Err(TemplateError::EmptyExpression {
            template: "/a/{}".to_string(),
            position: 3,
        })
    );
    assert_eq!(
        expand("/a{?}", &vars),
        Err(TemplateError::EmptyExpression {
            template: "/a{?}".to_string(),
            position: 2,
        })
    );
    assert_eq!(
        expand("/a{?rows,}", &vars),
        Err(TemplateError::InvalidVariable {
            template: "/a{?rows,}".to_string(),
            name: "".to_string(),
        })
    );
    assert_eq!(
        expand("/a{na-me}", &vars),
        Err(TemplateError::InvalidVariable {
            template: "/a{na-me}".to_string(),
            name: "na-me".to_string(),
        })
    );
}

#[test]
fn literal_text_is_untouched() {
    assert_eq!(
        expand("/dns/managed/", &Variables::new()).unwrap(),
        "/dns/managed/"
    );
}
