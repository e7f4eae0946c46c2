use uuid::Uuid;

use campus_enrollment::domain::types::{CourseSelection, DesiredSelection};
use campus_enrollment::error::EnrollmentError;
use campus_enrollment::usecase::selection::{GetSelectionUseCase, UpdateSelectionUseCase};

use crate::helpers::{
    AOC_FEE, CatalogFixture, ENTRANCE_FEE, MAJOR_FEE, MockApplicationRepo, catalog_fixture,
};

fn full_desired(f: &CatalogFixture) -> DesiredSelection {
    DesiredSelection {
        degree: Some(f.degree),
        program: Some(f.program),
        major: Some(f.major),
        minor: Some(f.minor),
        mdc: Some(f.mdc),
        vac: Some(f.vac),
        aec: Some(f.aec),
        aoc: Some(f.aoc),
    }
}

#[tokio::test]
async fn should_offer_degrees_when_nothing_is_selected() {
    let fixture = catalog_fixture();
    let uc = GetSelectionUseCase {
        applications: MockApplicationRepo::empty(),
        catalog: fixture.catalog.clone(),
    };
    let context = uc.execute(Uuid::new_v4()).await.unwrap();

    assert!(!context.is_complete);
    assert!(context.selected.degree.is_none());
    assert_eq!(context.available.degrees.len(), 1);
    assert!(context.available.programs.is_empty());
    assert_eq!(context.available.vacs.len(), 1);
    assert_eq!(context.available.aecs.len(), 1);
    assert_eq!(context.available.aocs.len(), 1);
}

#[tokio::test]
async fn should_offer_next_level_down_as_selection_deepens() {
    let fixture = catalog_fixture();
    let account_id = Uuid::new_v4();
    let uc = UpdateSelectionUseCase {
        applications: MockApplicationRepo::empty(),
        catalog: fixture.catalog.clone(),
    };

    // Degree only ⇒ its programs.
    let context = uc
        .execute(
            account_id,
            DesiredSelection {
                degree: Some(fixture.degree),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(context.available.degrees.is_empty());
    assert_eq!(context.available.programs.len(), 1);

    // Program ⇒ its majors.
    let context = uc
        .execute(
            account_id,
            DesiredSelection {
                degree: Some(fixture.degree),
                program: Some(fixture.program),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(context.available.majors.len(), 1);
    assert!(context.available.programs.is_empty());

    // Major ⇒ its offered minors and mdcs.
    let context = uc
        .execute(
            account_id,
            DesiredSelection {
                degree: Some(fixture.degree),
                program: Some(fixture.program),
                major: Some(fixture.major),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(context.available.minors.len(), 1);
    assert_eq!(context.available.mdcs.len(), 1);
    assert!(context.available.majors.is_empty());
}

#[tokio::test]
async fn should_remove_option_lists_for_selected_fields() {
    let fixture = catalog_fixture();
    let uc = UpdateSelectionUseCase {
        applications: MockApplicationRepo::empty(),
        catalog: fixture.catalog.clone(),
    };
    let context = uc
        .execute(
            Uuid::new_v4(),
            DesiredSelection {
                vac: Some(fixture.vac),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(context.available.vacs.is_empty(), "selected vac not offered");
    assert_eq!(context.available.aecs.len(), 1);
}

#[tokio::test]
async fn should_cascade_program_change_over_whatever_was_sent() {
    let fixture = catalog_fixture();
    let account_id = Uuid::new_v4();

    let mut stored = CourseSelection::empty(account_id);
    stored.degree = Some(fixture.degree);
    stored.program = Some(Uuid::new_v4()); // a different stored program
    stored.major = Some(Uuid::new_v4());
    stored.minor = Some(Uuid::new_v4());

    let uc = UpdateSelectionUseCase {
        applications: MockApplicationRepo::new(vec![stored]),
        catalog: fixture.catalog.clone(),
    };
    let context = uc
        .execute(
            account_id,
            DesiredSelection {
                degree: Some(fixture.degree),
                program: Some(fixture.program),
                major: Some(fixture.major),
                minor: Some(fixture.minor),
                mdc: Some(fixture.mdc),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // The incoming major/minor/mdc are dropped with the program change.
    assert!(context.selected.program.is_some());
    assert!(context.selected.major.is_none());
    assert!(context.selected.minor.is_none());
    assert!(context.selected.mdc.is_none());
}

#[tokio::test]
async fn should_persist_only_a_complete_selection() {
    let fixture = catalog_fixture();
    let account_id = Uuid::new_v4();
    let applications = MockApplicationRepo::empty();
    let rows = applications.rows_handle();

    let uc = UpdateSelectionUseCase {
        applications: applications.share(),
        catalog: fixture.catalog.clone(),
    };

    // Seven of eight: answered but never written.
    let mut seven = full_desired(&fixture);
    seven.aoc = None;
    let context = uc.execute(account_id, seven).await.unwrap();
    assert!(!context.is_complete);
    assert!(rows.lock().unwrap().is_empty(), "incomplete must not persist");

    // The next read observes no stored draft.
    let get = GetSelectionUseCase {
        applications: applications.share(),
        catalog: fixture.catalog.clone(),
    };
    let context = get.execute(account_id).await.unwrap();
    assert!(context.selected.degree.is_none());

    // Eight of eight persists and fixes the fee.
    let context = uc.execute(account_id, full_desired(&fixture)).await.unwrap();
    assert!(context.is_complete);
    assert_eq!(context.fee_amount, ENTRANCE_FEE + MAJOR_FEE + AOC_FEE);

    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].account_id, account_id);
    assert_eq!(rows[0].fee_amount, ENTRANCE_FEE + MAJOR_FEE + AOC_FEE);
    assert!(!rows[0].is_fee_paid);
}

#[tokio::test]
async fn should_reject_unknown_catalog_id() {
    let fixture = catalog_fixture();
    let uc = UpdateSelectionUseCase {
        applications: MockApplicationRepo::empty(),
        catalog: fixture.catalog.clone(),
    };
    let result = uc
        .execute(
            Uuid::new_v4(),
            DesiredSelection {
                degree: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(EnrollmentError::UnknownCatalogEntry)));
}

#[tokio::test]
async fn should_full_replace_on_update() {
    let fixture = catalog_fixture();
    let account_id = Uuid::new_v4();
    let applications = MockApplicationRepo::empty();
    let rows = applications.rows_handle();

    let uc = UpdateSelectionUseCase {
        applications: applications.share(),
        catalog: fixture.catalog.clone(),
    };
    uc.execute(account_id, full_desired(&fixture)).await.unwrap();
    assert!(rows.lock().unwrap()[0].is_complete());

    // A sparse follow-up clears everything it omits; the stored row is
    // untouched because the merged state is incomplete.
    let context = uc
        .execute(
            account_id,
            DesiredSelection {
                degree: Some(fixture.degree),
                program: Some(fixture.program),
                major: Some(fixture.major),
                minor: Some(fixture.minor),
                mdc: Some(fixture.mdc),
                vac: None,
                aec: None,
                aoc: None,
            },
        )
        .await
        .unwrap();
    assert!(!context.is_complete);
    assert!(context.selected.vac.is_none());
    assert!(rows.lock().unwrap()[0].is_complete(), "stored row untouched");
}
