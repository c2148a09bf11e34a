use crate::infra::{parse_date, InMemoryApplicationRepository, InMemoryCrmAlertPublisher};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use solar_ops::error::AppError;
use solar_ops::workflows::content::{ContentDraft, ContentKind};
use solar_ops::workflows::jobs::{JobCode, LegacyJobImporter, Segment, ServiceLine};
use solar_ops::workflows::onboarding::{
    AdvanceOutcome, BaseLocation, CompanyIdentity, ConsentSet, ContactDetails, OnboardingService,
    OnboardingSnapshot, OnboardingWizard, PartnerClass, ScoringConfig, ScoringEngine,
    UploadDescriptor,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Path to an onboarding snapshot JSON file; a built-in sample is scored
    /// when omitted
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct JobsImportArgs {
    /// CSV export of the legacy job tracker (Code,Title,Status,Created On)
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Submission date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) submitted_on: Option<NaiveDate>,
    /// Skip the intake/triage portion of the demo.
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let snapshot = match args.snapshot {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<OnboardingSnapshot>(&raw).map_err(|err| {
                AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
            })?
        }
        None => sample_snapshot(),
    };

    render_score_report(&snapshot);
    Ok(())
}

pub(crate) fn run_jobs_import(args: JobsImportArgs) -> Result<(), AppError> {
    let summary = LegacyJobImporter::from_path(args.csv)?;

    println!("Imported {} job(s)", summary.jobs.len());
    for job in &summary.jobs {
        println!(
            "  {}  [{}]  {}  -> {}",
            job.code,
            job.status.label(),
            job.title,
            job.slug
        );
    }
    if summary.skipped_rows > 0 {
        println!("Skipped {} malformed row(s)", summary.skipped_rows);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let submitted_on = args.submitted_on.unwrap_or_else(|| Local::now().date_naive());

    println!("Partner back-office demo");

    println!("\n== Onboarding wizard ==");
    let mut snapshot = sample_snapshot();
    let mut wizard = OnboardingWizard::start();
    walk_wizard(&mut wizard, &snapshot);

    println!("\nPartner changes their mind: an audit is on file after all.");
    wizard.apply_audit_answer(&mut snapshot, true);
    snapshot.audit_files.push(UploadDescriptor {
        name: "energy-audit-2025.pdf".to_string(),
        storage_key: "uploads/onboarding/energy-audit-2025.pdf".to_string(),
    });
    println!(
        "  path is now '{}', stale utility-bill and site uploads cleared",
        wizard.path().label()
    );
    walk_wizard(&mut wizard, &snapshot);

    println!("\n== Seriousness score ==");
    render_score_report(&snapshot);

    if !args.skip_intake {
        println!("\n== Intake and triage ==");
        let repository = Arc::new(InMemoryApplicationRepository::default());
        let alerts = Arc::new(InMemoryCrmAlertPublisher::default());
        let service = OnboardingService::new(repository, alerts.clone(), ScoringConfig::default());

        match service.submit(snapshot, submitted_on) {
            Ok(record) => {
                println!("  stored application {}", record.id.0);
                let triaged = service.triage(&record.id)?;
                let view = triaged.status_view();
                println!(
                    "  status '{}' (tier {})",
                    view.status,
                    view.tier.unwrap_or("n/a")
                );
                for alert in alerts.events() {
                    println!("  CRM alert '{}' for {}", alert.template, alert.application_id.0);
                }
            }
            Err(err) => println!("  submission refused: {err}"),
        }
    }

    println!("\n== Job codes ==");
    let year = submitted_on.year() as u16;
    let code = JobCode::new(Segment::Residential, ServiceLine::Epc, year, 1);
    println!("  new series starts at {}", code);
    println!("  next in series is {}", code.next_in_series());
    let parsed: JobCode = code.to_string().parse().expect("canonical code parses");
    println!(
        "  {} decodes to {} / {}",
        parsed,
        parsed.segment.label(),
        parsed.service.label()
    );

    println!("\n== Content slugs ==");
    for title in [
        "50kW Solar Installation for Tech Corp!",
        "Community Battery Pilot: Year One",
    ] {
        let draft = ContentDraft::new(ContentKind::CaseStudy, title);
        println!("  '{}' -> {}", draft.title, draft.permalink());
    }

    Ok(())
}

fn walk_wizard(wizard: &mut OnboardingWizard, snapshot: &OnboardingSnapshot) {
    println!(
        "  starting at '{}' ({} steps on path '{}')",
        wizard.current_step().label(),
        wizard.step_count(),
        wizard.path().label()
    );
    loop {
        match wizard.next(snapshot) {
            AdvanceOutcome::Advanced { step } => println!("  -> {}", step.label()),
            AdvanceOutcome::Blocked { step, missing } => {
                println!("  !! blocked on '{}', missing {:?}", step.label(), missing);
                break;
            }
            AdvanceOutcome::Completed => {
                println!("  wizard complete, ready to submit");
                break;
            }
        }
    }
}

fn render_score_report(snapshot: &OnboardingSnapshot) {
    let engine = ScoringEngine::new(ScoringConfig::default());
    let breakdown = engine.score(snapshot);

    for component in &breakdown.components {
        let mark = if component.satisfied { "x" } else { " " };
        println!("  [{mark}] {:<18} {} pts", component.key, component.weight);
    }
    println!(
        "  total {}/{} -> {}",
        breakdown.total,
        breakdown.max,
        breakdown.tier.label()
    );

    let wizard = OnboardingWizard::for_snapshot(snapshot);
    let outstanding = wizard.outstanding(snapshot);
    if outstanding.is_empty() {
        println!("  all steps satisfied");
    } else {
        println!("  outstanding: {outstanding:?}");
    }
}

fn sample_snapshot() -> OnboardingSnapshot {
    OnboardingSnapshot {
        company: CompanyIdentity {
            legal_name: "Helios Partners Ltd".to_string(),
            registration_number: "CRN 0448812".to_string(),
        },
        contact: ContactDetails {
            contact_name: "M. Okafor".to_string(),
            email: "m.okafor@helios-partners.example".to_string(),
            phone: "+44 20 7946 0001".to_string(),
        },
        base_location: BaseLocation {
            city: "Leeds".to_string(),
            country: "United Kingdom".to_string(),
        },
        partner_class: Some(PartnerClass::Installer),
        service_regions: vec!["Yorkshire".to_string(), "North East".to_string()],
        team_size: 14,
        completed_projects: 57,
        certifications: vec!["MCS".to_string(), "NICEIC".to_string()],
        has_recent_audit: Some(false),
        audit_files: Vec::new(),
        bill_files: vec![UploadDescriptor {
            name: "bills-2025-q1.pdf".to_string(),
            storage_key: "uploads/onboarding/bills-2025-q1.pdf".to_string(),
        }],
        site_files: vec![UploadDescriptor {
            name: "warehouse-roof.jpg".to_string(),
            storage_key: "uploads/onboarding/warehouse-roof.jpg".to_string(),
        }],
        consents: ConsentSet {
            information_accurate: true,
            data_processing: true,
            site_contact: true,
        },
    }
}
