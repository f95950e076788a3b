use pretty_assertions::assert_eq;
use yapi_structgen::cli::emit;
use yapi_structgen::pipeline::{self, Options};
use yapi_structgen::Error;

const DOCUMENT: &[u8] = include_bytes!("fixtures/api.json");

fn node_only() -> Options {
    Options { classification: Some("node".into()), ..Options::default() }
}

#[test]
fn renders_node_classification() {
    let texts = pipeline::generate(DOCUMENT, &node_only()).unwrap();
    assert_eq!(texts.len(), 3, "create req + create resp + list resp");

    assert_eq!(
        texts[0],
        "// title: Create node\n\
         // method: POST    path: /node/create\n\
         type Node/createReqDto struct {\n\
         \tLabels []string `json:\"labels\"`\n\
         \tNodeNetwork string `json:\"nodeNetwork\" binding:\"required\"` // network name\n\
         \tPorts []struct {\n\
         \t\tPort int `json:\"port\" binding:\"required\"`\n\
         \t\tPublic bool `json:\"public\"`\n\
         \t} `json:\"ports\"` // exposed ports\n\
         }\n"
    );
    assert_eq!(
        texts[1],
        "// title: Create node\n\
         // method: POST    path: /node/create\n\
         type Node/createRespRto struct {\n\
         \tCode int `json:\"code\" binding:\"required\"`\n\
         \tData struct {\n\
         \t\tId int `json:\"id\" binding:\"required\"` // new node id\n\
         \t} `json:\"data\"`\n\
         }\n"
    );
    assert_eq!(
        texts[2],
        "// title: List nodes\n\
         // method: GET    path: /node/list\n\
         type Node/listRespRto []struct {\n\
         \tName string `json:\"name\"`\n\
         }\n"
    );
}

#[test]
fn whole_document_stops_at_unregistered_type() {
    match pipeline::generate(DOCUMENT, &Options::default()) {
        Err(Error::UnknownType(ty)) => assert_eq!(ty, "date"),
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn unknown_classification_lists_what_exists() {
    let options = Options { classification: Some("order".into()), ..Options::default() };
    let err = pipeline::generate(DOCUMENT, &options).unwrap_err();
    assert!(err.to_string().contains("node, user"), "{err}");
}

#[test]
fn single_path_writes_one_file() {
    let options = Options { path: Some("/node/list".into()), ..Options::default() };
    let texts = pipeline::generate(DOCUMENT, &options).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gen/node_list.go");
    emit(Some(out.as_path()), &pipeline::join_output(&texts)).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("// title: List nodes\n"));
    assert!(written.ends_with("}\n\n\n"));
}

#[test]
fn inventory_lists_every_api() {
    let kinds = pipeline::inventory(DOCUMENT, &Options::default()).unwrap();
    let paths = kinds
        .iter()
        .flat_map(|k| k.apis.iter().map(|a| a.path.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(paths, ["/node/create", "/node/list", "/user/get"]);
}
