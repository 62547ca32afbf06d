use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::AgreementArgs;
use crate::error::AnnotationError;
use crate::model::{
    AgreementReport, AgreementResult, AnnotationRecord, AnnotationSet, ConfusionMatrix,
    Disagreement, DisagreementReport, InputFile, MetricReport,
};
use crate::tsv;
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

const AFFIXAL: &str = "affixal";
const INDIRECT: &str = "indirect";
const REPORT_MANIFEST_VERSION: u32 = 1;

mod calculator;
mod loader;
mod output;
mod reporter;
mod run;
mod stats;

pub use run::run;

use calculator::*;
use loader::*;
use output::*;
use reporter::*;
use stats::*;
