//! End-to-end checks over a chronicle loaded from stored JSON.

use lineage_model::{
    Chronicle, ClaimStrength, ClaimType, Dispute, DisputeResolution, PersonId,
    SuccessionStatus,
};
use succession_core::{
    add_dispute, all_relationships_from, heir, relationship_label, resolve_dispute,
    succession_line, Branch, FamilyGraph,
};
use uuid::Uuid;

fn pid(n: u128) -> PersonId {
    PersonId::from_uuid(Uuid::from_u128(n))
}

fn person_json(n: u128, name: &str, gender: &str, born: i32) -> serde_json::Value {
    serde_json::json!({
        "id": pid(n),
        "name": name,
        "gender": gender,
        "dateOfBirth": { "year": born, "month": 1, "day": 1 },
        "legitimacyStatus": "legitimate",
    })
}

fn parent(p: u128, c: u128) -> serde_json::Value {
    serde_json::json!({
        "person1Id": pid(p),
        "person2Id": pid(c),
        "relationshipType": "parent",
        "biologicalParent": true,
    })
}

fn spouse(a: u128, b: u128, status: &str) -> serde_json::Value {
    serde_json::json!({
        "person1Id": pid(a),
        "person2Id": pid(b),
        "relationshipType": "spouse",
        "marriageStatus": status,
    })
}

/// Grandfather(1)/Grandmother(2) -> Father(3)/Uncle(5);
/// Father(3)+Mother(4) -> Self(6)/Sister(7); Self(6)+Spouse(9) -> Child(10);
/// Sister(7)+BrotherInLaw(8).
fn load_chronicle() -> Chronicle {
    let people = serde_json::json!([
        person_json(1, "Osric", "male", 1100),
        person_json(2, "Hilde", "female", 1104),
        person_json(3, "Aldous", "male", 1125),
        person_json(4, "Wenna", "female", 1128),
        person_json(5, "Cedric", "male", 1127),
        person_json(6, "Edmund", "male", 1150),
        person_json(7, "Rowena", "female", 1148),
        person_json(8, "Tobin", "male", 1145),
        person_json(9, "Isolde", "female", 1152),
        person_json(10, "Maud", "female", 1175),
    ]);
    let relationships = serde_json::json!([
        parent(1, 3),
        parent(2, 3),
        parent(1, 5),
        parent(2, 5),
        spouse(1, 2, "widowed"),
        parent(3, 6),
        parent(4, 6),
        parent(3, 7),
        parent(4, 7),
        spouse(3, 4, "married"),
        spouse(6, 9, "married"),
        parent(6, 10),
        parent(9, 10),
        spouse(7, 8, "married"),
        // Malformed and non-graph records that must not break loading.
        { "person1Id": pid(1), "relationshipType": "parent" },
        { "person1Id": pid(6), "person2Id": pid(5), "relationshipType": "blood-oath" },
        { "person1Id": pid(1), "person2Id": pid(10), "relationshipType": "lineage-gap" },
        spouse(5, 8, "divorced"),
    ]);

    let mut chronicle = Chronicle::new();
    for person in serde_json::from_value::<Vec<lineage_model::Person>>(people).unwrap() {
        chronicle.add_person(person);
    }
    chronicle.relationships = serde_json::from_value(relationships).unwrap();
    chronicle
}

#[test]
fn labels_from_stored_snapshot() {
    let chronicle = load_chronicle();
    let graph = FamilyGraph::build(&chronicle.relationships);
    let label = |from, to| {
        relationship_label(pid(from), pid(to), &graph, chronicle.people()).map(|l| l.to_string())
    };

    assert_eq!(label(6, 1).as_deref(), Some("Grandfather"));
    assert_eq!(label(5, 6).as_deref(), Some("Nephew"));
    assert_eq!(label(6, 8).as_deref(), Some("Brother-in-Law"));
    assert_eq!(label(9, 3).as_deref(), Some("Father-in-Law"));

    // Lineage gaps are never direct edges.
    assert!(label(1, 10).is_none());
    // Divorce leaves no in-law tie.
    assert!(label(5, 8).is_none());

    let relatives = all_relationships_from(pid(6), chronicle.people(), &graph);
    assert_eq!(relatives.len(), 9);
}

#[test]
fn succession_for_the_fixture_family() {
    let mut chronicle = load_chronicle();
    let graph = FamilyGraph::build(&chronicle.relationships);

    let dignity = lineage_model::Dignity::new(
        "Lord of Breakmount",
        lineage_model::SuccessionType::MalePrimogeniture,
    )
    .held_by(pid(3));
    let dignity_id = chronicle.add_dignity(dignity.clone());

    let line = succession_line(&dignity, chronicle.people(), &graph, 10);
    let order: Vec<PersonId> = line.iter().map(|c| c.person_id).collect();
    // Son, then brother; the women follow: daughter, then granddaughter.
    assert_eq!(order, vec![pid(6), pid(5), pid(7), pid(10)]);
    assert_eq!(line[0].branch, Branch::Direct);
    assert_eq!(line[1].branch, Branch::Collateral);
    assert_eq!(line[1].relationship_description(), "Brother");
    assert!(line[2].lower_priority);

    let heir = heir(&dignity, chronicle.people(), &graph).unwrap();
    assert_eq!(heir.person_id, pid(6));

    let claim = Dispute::new(pid(5), ClaimType::Inheritance, ClaimStrength::Weak);
    let claim_id = claim.id;
    let updated = add_dispute(&mut chronicle, dignity_id, claim).unwrap();
    assert_eq!(updated.succession_status, SuccessionStatus::Disputed);

    let updated =
        resolve_dispute(&mut chronicle, dignity_id, claim_id, DisputeResolution::Failed, None)
            .unwrap();
    assert_eq!(updated.succession_status, SuccessionStatus::Stable);
    assert_eq!(
        chronicle.get_dignity(dignity_id).unwrap().succession_status,
        SuccessionStatus::Stable
    );
}
