// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{fs, path::PathBuf, time::Instant};

use prover::{prove, DomainParameters, ProofOptions};
use structopt::StructOpt;
use tracing::{event, level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

// RUNNER OPTIONS
// ================================================================================================

#[derive(StructOpt, Debug)]
#[structopt(name = "fibsquare", about = "FibonacciSq STARK prover")]
pub struct RunnerOptions {
    /// Path to a domainparams.json file; the reference parameters are generated when omitted
    #[structopt(short = "p", long = "params")]
    params_path: Option<PathBuf>,

    /// Number of queries to include in a proof
    #[structopt(short = "q", long = "queries", default_value = "3")]
    num_queries: usize,

    /// Print the full proof transcript after proving
    #[structopt(long = "print-proof")]
    print_proof: bool,
}

// RUNNER
// ================================================================================================

fn main() {
    // configure logging
    let format = tracing_subscriber::fmt::layer()
        .with_level(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .without_time()
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry().with(format).init();

    // read command-line args
    let options = RunnerOptions::from_args();

    event!(Level::DEBUG, "============================================================");

    // load or generate the domain parameters
    let now = Instant::now();
    let params = match &options.params_path {
        Some(path) => {
            let bytes = fs::read(path).expect("failed to read the domain parameters file");
            let params: DomainParameters =
                serde_json::from_slice(&bytes).expect("failed to parse the domain parameters");
            event!(
                Level::DEBUG,
                "Loaded domain parameters from {} in {} ms",
                path.display(),
                now.elapsed().as_millis()
            );
            params
        }
        None => {
            let params = DomainParameters::generate();
            event!(
                Level::DEBUG,
                "Generated reference domain parameters in {} ms",
                now.elapsed().as_millis()
            );
            params
        }
    };
    event!(Level::DEBUG, "Trace length: {}", params.trace.len());
    event!(Level::DEBUG, "Evaluation domain size: {}", params.evaluation_domain.len());
    event!(Level::DEBUG, "Trace commitment: {}", hex::encode(params.evaluation_root));

    // generate the proof
    let proof_options = ProofOptions::new(options.num_queries);
    let now = Instant::now();
    let proof = match prove(&params, &proof_options) {
        Ok(proof) => proof,
        Err(err) => {
            event!(Level::DEBUG, "Failed to generate proof: {}", err);
            return;
        }
    };
    event!(
        Level::DEBUG,
        "---------------------\nProof generated in {} ms",
        now.elapsed().as_millis()
    );

    let proof_bytes = proof.to_bytes();
    event!(Level::DEBUG, "Proof size: {:.1} KB", proof_bytes.len() as f64 / 1024f64);
    event!(Level::DEBUG, "Proof entries: {}", proof.transcript().len());

    if options.print_proof {
        event!(Level::DEBUG, "---------------------");
        for entry in proof.transcript() {
            event!(Level::DEBUG, "{}", entry);
        }
    }
    event!(Level::DEBUG, "============================================================");
}
