use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::{info, warn};

use crate::cli::{ExtractArgs, SynsetPos};
use crate::model::AntonymRelation;
use crate::tsv;
use crate::util::ensure_parent_directory;

const ANTONYM_POINTER: &str = "!";
const SIMILAR_TO_POINTER: &str = "&";

mod collect;
mod run;
#[cfg(test)]
mod tests;
mod wndb;

pub use run::run;

use collect::*;
use wndb::*;
