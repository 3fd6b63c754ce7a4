use async_trait::async_trait;
use clap::Parser;
use log::*;
use multisend::{encode_multi_send, Address, MultiSendTx};
use payout::{
	pipeline::{run, BundleSubmitter, ExecutionGate},
	source::read_transfer_file,
	Error, DEFAULT_BATCH_SIZE,
};
use std::{
	io::{self, BufRead, Write},
	path::PathBuf,
};

/// Util program to prepare batched payouts from a treasury safe
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Address of the treasury safe the transfers are paid from.
	#[arg(long)]
	fund_account: Address,

	/// Path to a csv or json file listing receivers and amounts.
	#[arg(long)]
	transfer_file: PathBuf,

	/// Number of transfers to pack into one multisend bundle.
	#[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
	batch_size: usize,
}

/// Gate asking the operator on the terminal.
struct StdinGate;

#[async_trait]
impl ExecutionGate for StdinGate {
	async fn confirm(&mut self, question: &str) -> Result<bool, Error> {
		print!("{} [y/N] ", question);
		io::stdout().flush()?;

		let mut answer = String::new();
		io::stdin().lock().read_line(&mut answer)?;
		Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
	}
}

/// Submitter that encodes each bundle and reports it instead of sending it.
struct DryRunSubmitter {
	treasury: Address,
}

#[async_trait]
impl BundleSubmitter for DryRunSubmitter {
	async fn submit(&mut self, bundle: &[MultiSendTx]) -> Result<(), Error> {
		let call_data = encode_multi_send(bundle);
		info!(
			"dry run: {} bytes of multiSend call data prepared for safe {}",
			call_data.len(),
			self.treasury
		);
		Ok(())
	}
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	env_logger::init_from_env(
		env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
	);

	let args = Args::parse();

	let transfers = read_transfer_file(&args.transfer_file)?;
	info!("Found {} valid elements in transfer file", transfers.len());

	let mut gate = StdinGate;
	let mut submitter = DryRunSubmitter { treasury: args.fund_account };
	run(transfers, args.batch_size, &mut gate, &mut submitter).await?;

	Ok(())
}
