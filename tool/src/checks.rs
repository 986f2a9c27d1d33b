use std::io::Write;
use std::path::{Path, PathBuf};

use ezid_verify_core::{
    encode_anvl, job_verdict, parse_created_identifier, CheckId, CreationResult, Environment,
    HttpOutcome, Record, RecordError, ReportLine, SHOULDER_FIXTURES,
};
use tracing::{debug, info};

use crate::client::Client;
use crate::error::ToolError;
use crate::probe::JobProbe;

pub const STATUS_ITEM: u32 = 1;
pub const SEARCH_ITEM: u32 = 2;
pub const CREATE_ITEM: u32 = 3;
pub const JOBS_ITEM: u32 = 4;

pub const STATUS_EXPECTED_TEXT: &str = "success: EZID is up";
pub const SEARCH_QUERY: &str =
    "search?filtered=t&title=California+Digital+Library&object_type=Dataset";

const STATUS_ITEM_NAME: &str = "Verify EZID status";
const SEARCH_ITEM_NAME: &str = "Verify search function";

#[derive(Clone, Debug)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Everything a run needs besides its collaborators.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub env: Environment,
    pub base_url: String,
    pub credentials: Credentials,
    pub fixture_dir: PathBuf,
}

impl RunContext {
    pub fn new(env: Environment, credentials: Credentials, fixture_dir: PathBuf) -> Self {
        Self {
            env,
            base_url: env.base_url().to_string(),
            credentials,
            fixture_dir,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoadedFixture {
    pub shoulder: &'static str,
    pub record: Record,
}

/// Loads every creation fixture; the first defective file aborts the run.
pub fn load_fixtures(dir: &Path) -> Result<Vec<LoadedFixture>, RecordError> {
    SHOULDER_FIXTURES
        .iter()
        .map(|fixture| {
            let record = Record::load(&dir.join(fixture.file_name))?;
            Ok(LoadedFixture {
                shoulder: fixture.shoulder,
                record,
            })
        })
        .collect()
}

pub fn verify_status(client: &Client, base_url: &str) -> ReportLine {
    let id = CheckId::item(STATUS_ITEM);
    match client.get(&format!("{base_url}/status")) {
        HttpOutcome::Response { body, .. } if body == STATUS_EXPECTED_TEXT => {
            ReportLine::ok(id, STATUS_ITEM_NAME)
        }
        HttpOutcome::Response { body, .. } => ReportLine::error(
            id,
            format!(
                "{STATUS_ITEM_NAME} - AssertionError: returned text \"{body}\" does not match expected text: \"{STATUS_EXPECTED_TEXT}\""
            ),
        ),
        failed => ReportLine::error(id, failed_description(STATUS_ITEM_NAME, &failed)),
    }
}

pub fn verify_search(client: &Client, base_url: &str) -> ReportLine {
    let id = CheckId::item(SEARCH_ITEM);
    let outcome = client.get(&format!("{base_url}/{SEARCH_QUERY}"));
    if outcome.is_success() {
        ReportLine::ok(id, SEARCH_ITEM_NAME)
    } else {
        ReportLine::error(id, failed_description(SEARCH_ITEM_NAME, &outcome))
    }
}

fn failed_description(item: &str, outcome: &HttpOutcome) -> String {
    match outcome.failure_summary() {
        Some(summary) => format!("{item} - {summary}"),
        None => item.to_string(),
    }
}

/// POSTs each fixture to its shoulder. Every fixture is attempted.
pub fn create_identifiers(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    fixtures: &[LoadedFixture],
) -> Vec<CreationResult> {
    fixtures
        .iter()
        .map(|fixture| {
            let url = format!("{base_url}/shoulder/{}", fixture.shoulder);
            let body = encode_anvl(&fixture.record);
            let outcome = client.post(&url, &credentials.user, &credentials.password, &body);
            let (identifier, response_text) = match &outcome {
                HttpOutcome::Response { body, .. } => (parse_created_identifier(body), body.clone()),
                HttpOutcome::Failed { .. } => (None, outcome.failure_summary().unwrap_or_default()),
            };
            debug!(shoulder = fixture.shoulder, ?identifier, "creation attempted");
            CreationResult {
                shoulder: fixture.shoulder.to_string(),
                identifier,
                response_text,
            }
        })
        .collect()
}

pub fn creation_lines(results: &[CreationResult]) -> Vec<ReportLine> {
    results
        .iter()
        .zip(1..)
        .map(|(result, sub)| {
            let id = CheckId::sub(CREATE_ITEM, sub);
            match &result.identifier {
                Some(identifier) => ReportLine::ok(id, format!("{identifier} created")),
                None => ReportLine::error(
                    id,
                    format!("{} on {}", result.response_text.trim_end(), result.shoulder),
                ),
            }
        })
        .collect()
}

/// Returns `None` for environments without background jobs.
pub fn background_job_lines<P: JobProbe>(env: Environment, probe: &P) -> Option<Vec<ReportLine>> {
    let tier = env.job_tier()?;
    let lines = tier
        .expectations()
        .iter()
        .zip(1..)
        .map(|(expectation, sub)| {
            let running = probe.is_running(expectation.job);
            let verdict = job_verdict(expectation.should_be_running, running);
            ReportLine::new(
                verdict.status(),
                CheckId::sub(JOBS_ITEM, sub),
                verdict.describe(expectation.job),
            )
        })
        .collect();
    Some(lines)
}

pub fn skip_jobs_line(env: Environment) -> ReportLine {
    ReportLine::info(
        CheckId::item(JOBS_ITEM),
        format!("On {env}: skip background job status check"),
    )
}

/// Writes report lines, flushing after each so progress is visible.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn section(&mut self, title: &str) -> Result<(), ToolError> {
        writeln!(self.out, "## {title}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, line: &ReportLine) -> Result<(), ToolError> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Runs all four checks in order. Only setup and output failures are errors;
/// check failures are reported as lines.
pub fn run<W: Write, P: JobProbe>(
    ctx: &RunContext,
    client: &Client,
    probe: &P,
    out: W,
) -> Result<(), ToolError> {
    let fixtures = load_fixtures(&ctx.fixture_dir)?;
    let mut reporter = Reporter::new(out);

    info!(env = %ctx.env, base_url = %ctx.base_url, "checking service status");
    reporter.line(&verify_status(client, &ctx.base_url))?;

    info!("checking search");
    reporter.line(&verify_search(client, &ctx.base_url))?;

    info!(fixtures = fixtures.len(), "creating test identifiers");
    reporter.section("Create identifier")?;
    let results = create_identifiers(client, &ctx.base_url, &ctx.credentials, &fixtures);
    for line in creation_lines(&results) {
        reporter.line(&line)?;
    }

    match ctx.env.job_tier() {
        None => {
            info!(env = %ctx.env, "skipping background job check");
            reporter.line(&skip_jobs_line(ctx.env))?;
        }
        Some(tier) => {
            info!(?tier, "checking background jobs");
            reporter.section("Check background job status")?;
            for line in background_job_lines(ctx.env, probe).unwrap_or_default() {
                reporter.line(&line)?;
            }
        }
    }
    Ok(())
}
