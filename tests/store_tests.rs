use diesel::prelude::*;

use kinasedb::query::{self, QueryError};
use kinasedb::store::entity::{self, StoreError};
use kinasedb::store::models::{Inhibitor, Kinase, KinaseInhibitor};
use kinasedb::store::seed;

fn kinase(gene: &str, name: &str, uniprot: &str, family: &str, location: &str) -> Kinase {
    Kinase {
        gene_symbol: gene.to_string(),
        full_name: name.to_string(),
        uniprot_code: uniprot.to_string(),
        family: family.to_string(),
        cell_location: location.to_string(),
    }
}

fn inhibitor(name: &str, structure: &str, weight: i32, image: &str) -> Inhibitor {
    Inhibitor {
        name: name.to_string(),
        chemical_structure: structure.to_string(),
        molecular_weight: weight,
        chemical_image: image.to_string(),
    }
}

fn pair(gene: &str, inhibitor: &str) -> KinaseInhibitor {
    KinaseInhibitor {
        gene_symbol: gene.to_string(),
        inhibitor: inhibitor.to_string(),
    }
}

/// In-memory database seeded like the production one: ATM has two
/// inhibitors, ATR has none.
fn seeded_connection() -> SqliteConnection {
    let mut connection =
        SqliteConnection::establish(":memory:").expect("in-memory database");
    seed::create_tables(&mut connection).unwrap();

    let kinases = vec![
        kinase(
            "ATM",
            "ATM serine/threonine kinase",
            "Q13315",
            "Ser/Thr kinase.",
            "Nucleus",
        ),
        kinase(
            "ATR",
            "ATR serine/threonine kinase",
            "Q13535",
            "Ser/Thr kinase",
            "Nucleus",
        ),
    ];
    seed::insert_kinases(&kinases, &mut connection).unwrap();

    let inhibitors = vec![
        inhibitor("KU-55933", "C21H17NO3S2", 395, "images/ku-55933.png"),
        inhibitor("Wortmannin", "C23H24O8", 428, "images/wortmannin.png"),
    ];
    seed::insert_inhibitors(&inhibitors, &mut connection).unwrap();

    let associations = vec![pair("ATM", "KU-55933"), pair("ATM", "Wortmannin")];
    seed::insert_associations(&associations, &mut connection).unwrap();

    connection
}

#[test]
fn get_kinase_strips_trailing_family_period() {
    let mut connection = seeded_connection();
    let kinase = entity::get_kinase(&mut connection, "ATM").unwrap();
    assert_eq!(kinase.family, "Ser/Thr kinase");
    assert_eq!(kinase.full_name, "ATM serine/threonine kinase");
}

#[test]
fn get_kinase_is_idempotent() {
    let mut connection = seeded_connection();
    let first = entity::get_kinase(&mut connection, "ATM").unwrap();
    let second = entity::get_kinase(&mut connection, "ATM").unwrap();
    assert_eq!(first, second);
}

#[test]
fn get_kinase_does_not_case_fold_the_key() {
    let mut connection = seeded_connection();
    let result = entity::get_kinase(&mut connection, "atm");
    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[test]
fn get_inhibitor_is_idempotent() {
    let mut connection = seeded_connection();
    let first = entity::get_inhibitor(&mut connection, "Wortmannin").unwrap();
    let second = entity::get_inhibitor(&mut connection, "Wortmannin").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.molecular_weight, 428);
}

#[test]
fn inhibitors_of_returns_the_association_in_name_order() {
    let mut connection = seeded_connection();
    let inhibitors = entity::inhibitors_of(&mut connection, "ATM").unwrap();
    let names: Vec<&str> = inhibitors.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["KU-55933", "Wortmannin"]);
}

#[test]
fn inhibitors_of_distinguishes_empty_from_missing() {
    let mut connection = seeded_connection();

    let none = entity::inhibitors_of(&mut connection, "ATR").unwrap();
    assert!(none.is_empty());

    let missing = entity::inhibitors_of(&mut connection, "UNKNOWN_GENE");
    assert!(matches!(missing, Err(StoreError::NotFound)));
}

#[test]
fn association_is_symmetric() {
    let mut connection = seeded_connection();

    let inhibitors = entity::inhibitors_of(&mut connection, "ATM").unwrap();
    assert!(!inhibitors.is_empty());

    for inhibitor in inhibitors {
        let kinases = entity::kinases_of(&mut connection, &inhibitor.name).unwrap();
        assert!(
            kinases.iter().any(|k| k.gene_symbol == "ATM"),
            "{} does not list ATM",
            inhibitor.name
        );
    }
}

#[test]
fn orphan_associations_are_rejected() {
    let mut connection = seeded_connection();

    let no_such_kinase = seed::insert_associations(
        &[pair("GHOST", "KU-55933")],
        &mut connection,
    );
    assert!(matches!(
        no_such_kinase,
        Err(seed::SeedError::Database(
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ),
        ))
    ));

    let no_such_inhibitor =
        seed::insert_associations(&[pair("ATM", "Phantom")], &mut connection);
    assert!(no_such_inhibitor.is_err());

    // The rejected pairs must not have been persisted either.
    let inhibitors = entity::inhibitors_of(&mut connection, "ATM").unwrap();
    assert_eq!(inhibitors.len(), 2);
}

#[test]
fn seeding_twice_does_not_duplicate_rows() {
    let mut connection = seeded_connection();

    let associations = vec![pair("ATM", "KU-55933"), pair("ATM", "Wortmannin")];
    seed::insert_associations(&associations, &mut connection).unwrap();

    let inhibitors = entity::inhibitors_of(&mut connection, "ATM").unwrap();
    assert_eq!(inhibitors.len(), 2);
}

#[test]
fn search_kinase_uppercases_the_term() {
    let mut connection = seeded_connection();
    let view = query::search_kinase(&mut connection, "atm").unwrap();
    assert_eq!(view.gene, "ATM");
    assert_eq!(view.family, "Ser/Thr kinase");
    assert_eq!(view.location, "Nucleus");
}

#[test]
fn search_kinase_miss_preserves_the_original_term() {
    let mut connection = seeded_connection();
    let error = query::search_kinase(&mut connection, "unknown_gene").unwrap_err();
    match error {
        QueryError::NoMatches { query } => assert_eq!(query, "unknown_gene"),
        other => panic!("expected NoMatches, got {:?}", other),
    }
}

#[test]
fn search_inhibitors_is_keyed_by_kinase_gene() {
    let mut connection = seeded_connection();
    let listing = query::search_inhibitors(&mut connection, "atm").unwrap();
    assert_eq!(listing.gene, "ATM");
    assert_eq!(listing.inh_number, 2);
    let names: Vec<&str> = listing.inhibitors.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["KU-55933", "Wortmannin"]);
}

#[test]
fn inhibitor_summary_lists_target_kinases() {
    let mut connection = seeded_connection();
    let summary = query::inhibitor_summary(&mut connection, "KU-55933").unwrap();
    assert_eq!(summary.structure, "C21H17NO3S2");
    assert_eq!(summary.weight, 395);
    assert_eq!(summary.image, "images/ku-55933.png");
    let genes: Vec<&str> = summary.kinases.iter().map(|k| k.gene_symbol.as_str()).collect();
    assert_eq!(genes, vec!["ATM"]);
}

#[test]
fn inhibitor_summary_miss_is_no_matches() {
    let mut connection = seeded_connection();
    let error = query::inhibitor_summary(&mut connection, "NoSuchCompound").unwrap_err();
    assert!(matches!(error, QueryError::NoMatches { .. }));
}
