use serde::Serialize;
use uuid::Uuid;

use crate::domain::repository::{ApplicationRepository, CatalogRepository};
use crate::domain::types::{
    CourseKind, CourseOption, CourseSelection, Degree, DesiredSelection, Major, Program,
};
use crate::error::EnrollmentError;

/// Expanded detail of the (possibly uncommitted) merged selection.
#[derive(Debug, Serialize)]
pub struct SelectedDetail {
    pub degree: Option<Degree>,
    pub program: Option<Program>,
    pub major: Option<Major>,
    pub minor: Option<CourseOption>,
    pub mdc: Option<CourseOption>,
    pub vac: Option<CourseOption>,
    pub aec: Option<CourseOption>,
    pub aoc: Option<CourseOption>,
}

/// Options open at the deepest selected level. A list for an
/// already-selected field is emptied and dropped from the body.
#[derive(Debug, Default, Serialize)]
pub struct AvailableOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degrees: Vec<Degree>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<Program>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub majors: Vec<Major>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minors: Vec<CourseOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mdcs: Vec<CourseOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vacs: Vec<CourseOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aecs: Vec<CourseOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aocs: Vec<CourseOption>,
}

#[derive(Debug, Serialize)]
pub struct SelectionContext {
    pub selected: SelectedDetail,
    pub available: AvailableOptions,
    /// True only when all eight fields are chosen; an incomplete
    /// update is answered but never persisted.
    pub is_complete: bool,
    pub fee_amount: i64,
    pub is_fee_paid: bool,
}

/// Null the downstream fields of `desired` that the stored state
/// invalidates. Compared against the state *before* the update:
/// a changed program drops major, minor and mdc; a changed major
/// drops minor and mdc. Degree changes do not cascade.
pub fn apply_cascade(stored: &CourseSelection, desired: &DesiredSelection) -> DesiredSelection {
    let mut next = desired.clone();
    if next.program != stored.program {
        next.major = None;
        next.minor = None;
        next.mdc = None;
    }
    if next.major != stored.major {
        next.minor = None;
        next.mdc = None;
    }
    next
}

/// Overwrite all eight fields. Full-replace PUT semantics: a missing
/// incoming field clears the stored one.
pub fn merge(stored: &CourseSelection, desired: &DesiredSelection) -> CourseSelection {
    CourseSelection {
        degree: desired.degree,
        program: desired.program,
        major: desired.major,
        minor: desired.minor,
        mdc: desired.mdc,
        vac: desired.vac,
        aec: desired.aec,
        aoc: desired.aoc,
        ..stored.clone()
    }
}

async fn lookup_option<C: CatalogRepository>(
    catalog: &C,
    kind: CourseKind,
    id: Option<Uuid>,
) -> Result<Option<CourseOption>, EnrollmentError> {
    match id {
        Some(id) => catalog
            .course_option(kind, id)
            .await?
            .ok_or(EnrollmentError::UnknownCatalogEntry)
            .map(Some),
        None => Ok(None),
    }
}

/// Expand a selection into entity detail, rejecting unknown ids.
async fn expand<C: CatalogRepository>(
    catalog: &C,
    selection: &CourseSelection,
) -> Result<SelectedDetail, EnrollmentError> {
    let degree = match selection.degree {
        Some(id) => Some(
            catalog
                .degree(id)
                .await?
                .ok_or(EnrollmentError::UnknownCatalogEntry)?,
        ),
        None => None,
    };
    let program = match selection.program {
        Some(id) => Some(
            catalog
                .program(id)
                .await?
                .ok_or(EnrollmentError::UnknownCatalogEntry)?,
        ),
        None => None,
    };
    let major = match selection.major {
        Some(id) => Some(
            catalog
                .major(id)
                .await?
                .ok_or(EnrollmentError::UnknownCatalogEntry)?,
        ),
        None => None,
    };

    Ok(SelectedDetail {
        degree,
        program,
        major,
        minor: lookup_option(catalog, CourseKind::Minor, selection.minor).await?,
        mdc: lookup_option(catalog, CourseKind::Mdc, selection.mdc).await?,
        vac: lookup_option(catalog, CourseKind::Vac, selection.vac).await?,
        aec: lookup_option(catalog, CourseKind::Aec, selection.aec).await?,
        aoc: lookup_option(catalog, CourseKind::Aoc, selection.aoc).await?,
    })
}

/// Options for the next step down, keyed off the deepest selected
/// level. VAC, AEC and AOC are flat catalogs and always offered.
async fn available<C: CatalogRepository>(
    catalog: &C,
    selection: &CourseSelection,
) -> Result<AvailableOptions, EnrollmentError> {
    let mut options = AvailableOptions::default();

    if let Some(major_id) = selection.major {
        if selection.minor.is_none() {
            options.minors = catalog.offered_minors(major_id).await?;
        }
        if selection.mdc.is_none() {
            options.mdcs = catalog.offered_mdcs(major_id).await?;
        }
    } else if let Some(program_id) = selection.program {
        options.majors = catalog.majors_of_program(program_id).await?;
    } else if let Some(degree_id) = selection.degree {
        options.programs = catalog.programs_of_degree(degree_id).await?;
    } else {
        options.degrees = catalog.list_degrees().await?;
    }

    if selection.vac.is_none() {
        options.vacs = catalog.list_vacs().await?;
    }
    if selection.aec.is_none() {
        options.aecs = catalog.list_aecs().await?;
    }
    if selection.aoc.is_none() {
        options.aocs = catalog.list_aocs().await?;
    }

    Ok(options)
}

async fn build_context<C: CatalogRepository>(
    catalog: &C,
    selection: &CourseSelection,
) -> Result<SelectionContext, EnrollmentError> {
    let selected = expand(catalog, selection).await?;
    let available = available(catalog, selection).await?;
    Ok(SelectionContext {
        selected,
        available,
        is_complete: selection.is_complete(),
        fee_amount: selection.fee_amount,
        is_fee_paid: selection.is_fee_paid,
    })
}

// ── UpdateSelection ──────────────────────────────────────────────────────────

pub struct UpdateSelectionUseCase<P, C>
where
    P: ApplicationRepository,
    C: CatalogRepository,
{
    pub applications: P,
    pub catalog: C,
}

impl<P, C> UpdateSelectionUseCase<P, C>
where
    P: ApplicationRepository,
    C: CatalogRepository,
{
    pub async fn execute(
        &self,
        account_id: Uuid,
        desired: DesiredSelection,
    ) -> Result<SelectionContext, EnrollmentError> {
        let stored = self
            .applications
            .find_by_account(account_id)
            .await?
            .unwrap_or_else(|| CourseSelection::empty(account_id));

        let cascaded = apply_cascade(&stored, &desired);
        let mut merged = merge(&stored, &cascaded);

        // Expansion doubles as existence validation of every id.
        let selected = expand(&self.catalog, &merged).await?;

        // Only a complete selection is written back; the fee is fixed
        // at that same point.
        if let (true, Some(program), Some(major), Some(aoc)) = (
            merged.is_complete(),
            &selected.program,
            &selected.major,
            &selected.aoc,
        ) {
            merged.fee_amount = program.entrance_fee + major.fee + aoc.fee.unwrap_or(0);
            self.applications.save(&merged).await?;
        }

        let available = available(&self.catalog, &merged).await?;
        Ok(SelectionContext {
            selected,
            available,
            is_complete: merged.is_complete(),
            fee_amount: merged.fee_amount,
            is_fee_paid: merged.is_fee_paid,
        })
    }
}

// ── GetSelection ─────────────────────────────────────────────────────────────

pub struct GetSelectionUseCase<P, C>
where
    P: ApplicationRepository,
    C: CatalogRepository,
{
    pub applications: P,
    pub catalog: C,
}

impl<P, C> GetSelectionUseCase<P, C>
where
    P: ApplicationRepository,
    C: CatalogRepository,
{
    pub async fn execute(&self, account_id: Uuid) -> Result<SelectionContext, EnrollmentError> {
        let stored = self
            .applications
            .find_by_account(account_id)
            .await?
            .unwrap_or_else(|| CourseSelection::empty(account_id));

        build_context(&self.catalog, &stored).await
    }
}
