use std::fs;

use decodebench::{Record, Strategy};

#[test]
fn bundled_document() {
    let contents = fs::read("./document.json").unwrap();
    let [wrapper, object, dictionary] =
        Strategy::ALL.map(|strategy| strategy.decode(&contents).unwrap());

    assert_eq!(object.len(), 200);
    assert_eq!(object, dictionary);
    assert!(object
        .iter()
        .zip(1..)
        .all(|(record, id)| record.id == id && !record.title.is_empty()));
    assert_eq!(object.iter().filter(|record| record.completed).count(), 111);

    // The wrapper strategy reads `completd`, which the document never uses.
    let expected = object
        .iter()
        .map(|record| Record {
            completed: false,
            ..record.clone()
        })
        .collect::<Vec<_>>();
    assert_eq!(wrapper, expected);
}

#[test]
fn records_roundtrip_through_serde() {
    let contents = fs::read("./document.json").unwrap();
    let typed: Vec<Record> = serde_json::from_slice(&contents).unwrap();
    assert_eq!(typed, Strategy::GenericObject.decode(&contents).unwrap());
}
