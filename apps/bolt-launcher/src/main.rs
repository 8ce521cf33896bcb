mod args;
mod headless;
mod logging;

use args::LaunchArgs;
use args::USAGE;
use bolt_resource::ReadOutcome;
use bolt_resource::ResponseHead;
use bolt_shell::RouteDecision;
use bolt_shell::RouteRequest;
use bolt_shell::SessionId;
use bolt_shell::Shell;
use bolt_shell::ShellConfig;
use headless::HeadlessFactory;
use std::process::ExitCode;

const READ_CHUNK_BYTES: usize = 16 * 1024;
const LAUNCH_SESSION: SessionId = SessionId::new(1);

fn main() -> ExitCode {
    let args = match LaunchArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("Bolt startup error: {error}");
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    logging::init(args.log_level.as_deref());

    let shell = match Shell::new(args.apply(ShellConfig::from_env())) {
        Ok(shell) => shell,
        Err(error) => {
            eprintln!("Bolt startup error: {error}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(error) = shell.on_context_initialized(&HeadlessFactory) {
        eprintln!("Bolt startup error: {error}");
        return ExitCode::FAILURE;
    }
    shell.on_session_created(LAUNCH_SESSION);

    for url in &args.routes {
        println!("{}", route_report(&shell, LAUNCH_SESSION, url, args.main_frame));
    }

    shell.on_may_close(LAUNCH_SESSION);
    shell.on_message(LAUNCH_SESSION, "__bolt_app_closed", None);
    shell.on_closed(LAUNCH_SESSION);
    ExitCode::SUCCESS
}

/// One line describing how the shell answers `url`, after draining the body
/// the way the host engine would.
fn route_report(shell: &Shell, session: SessionId, url: &str, main_frame: bool) -> String {
    let request = RouteRequest::new(session, url).main_frame(main_frame);
    let (rule, mut response) = match shell.decide_response(&request) {
        RouteDecision::Override { rule, response } => (rule, response),
        RouteDecision::PassThrough => return format!("{url} -> pass-through"),
    };

    let mut head = ResponseHead::default();
    let declared = response.describe_headers(&mut head);

    let mut received = 0_usize;
    let mut buf = vec![0_u8; READ_CHUNK_BYTES];
    if response.open() {
        while let ReadOutcome::Data(count) = response.read(&mut buf) {
            received += count;
        }
    }

    let status = head.status.map_or(0, |status| status.as_u16());
    let mime_type = head.mime_type.as_deref().unwrap_or("-");
    let mut line = format!(
        "{url} -> {status} {mime_type} [{}] {received}/{declared} bytes",
        rule.as_str()
    );
    if let Some(location) = head.header("Location") {
        line.push_str(" location=");
        line.push_str(location);
    }
    line
}
