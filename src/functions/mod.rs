//! The catalogue of Zab functions.
//!
//! Every function has the same shape, `(&Zab, &[Arg], &dyn TextOracle) ->
//! Result<Zab, ZabError>`, and builds a fresh successor with the turn budget
//! copied over. Argument problems fail the call; oracle problems never do.
//!
//! | group | functions |
//! |-------|-----------|
//! | name  | `fin`, `bin`, `stin`, `hin`, `min`, `vin`, `cin` |
//! | pim   | `tox`, `plox`, `rox` |
//! | bim   | `sox`, `vox`, `lox`, `mox` |
//! | both  | `hox`, `box` |

mod bim;
mod multi;
mod name;
mod pim;
pub mod tables;

use crate::core::{expect_arity, Arg, ZabError};
use crate::oracle::TextOracle;
use crate::registry::RegistryBuilder;
use tracing::warn;

pub use bim::{lox, mox, sox, vox};
pub use multi::{hox, r#box};
pub use name::{bin, cin, fin, hin, min, stin, vin};
pub use pim::{plox, rox, tox};

/// Install the whole catalogue on a registry builder.
pub fn register_all(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .register("fin", fin)
        .register("bin", bin)
        .register("stin", stin)
        .register("hin", hin)
        .register("min", min)
        .register("vin", vin)
        .register("cin", cin)
        .register("tox", tox)
        .register("plox", plox)
        .register("rox", rox)
        .register("sox", sox)
        .register("vox", vox)
        .register("lox", lox)
        .register("mox", mox)
        .register("hox", hox)
        .register("box", r#box)
}

fn int_arg(function: &str, args: &[Arg]) -> Result<i64, ZabError> {
    expect_arity(function, args, 1)?;
    args[0].as_int(function)
}

fn text_arg(function: &str, args: &[Arg]) -> Result<String, ZabError> {
    expect_arity(function, args, 1)?;
    Ok(args[0].as_text().into_owned())
}

/// Ask the oracle, trimming the answer. A failure is logged and becomes `None`.
fn ask(oracle: &dyn TextOracle, function: &str, prompt: &str) -> Option<String> {
    match oracle.respond(prompt) {
        Ok(answer) => Some(answer.trim().to_string()),
        Err(e) => {
            warn!(function, error = %e, "Oracle call failed, applying fallback");
            None
        }
    }
}
