//! Ask command: keyword-matched answer from the advisor.

use anyhow::{Result, bail};
use tracing::{debug, info_span};

use sipai_advisory::{classify_question, respond};

use crate::cli::AskArgs;
use crate::convert;

pub fn run(args: AskArgs) -> Result<()> {
    let _cmd = info_span!("ask").entered();
    // Config is only validated here; the advisor has no tunables.
    convert::load_config(args.common.config.as_deref())?;

    let question = args.question.join(" ");
    debug!(topic = ?classify_question(&question), "classified question");
    let Some(reply) = respond(&question) else {
        bail!("question must not be blank");
    };
    println!("{reply}");
    Ok(())
}
