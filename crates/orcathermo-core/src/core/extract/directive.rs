/// Method and basis set declared on an ORCA `!` directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub reference: String,
    pub method: Option<String>,
    pub basis_set: Option<String>,
}

const BASIS_SET_PREFIXES: &[&str] = &[
    "def2-", "def-", "ma-def2-", "dkh-def2-", "zora-def2-", "x2c-", "cc-p", "aug-cc-", "may-cc-",
    "jun-cc-", "jul-cc-", "6-31", "3-21", "sto-", "ano-", "saug-", "pc-", "aug-pc-", "pcseg-",
    "lanl",
];

/// Ahlrichs basis sets that ORCA also accepts without the `def2-` prefix.
const BASIS_SET_NAMES: &[&str] = &[
    "sv", "sv(p)", "svp", "tzv", "tzv(p)", "tzvp", "tzvpp", "qzvp", "qzvpp",
];

fn looks_like_basis_set(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    BASIS_SET_NAMES.contains(&lower.as_str())
        || BASIS_SET_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Parses a directive such as `! RKS B3LYP def2-TZVP Opt Freq`.
///
/// The token following the reference keyword is the method and the next one the basis
/// set. When the first token is itself a basis set (`! RHF def2-SVP`), the method is the
/// theory named by the reference keyword (`HF` or `KS`).
pub fn parse_directive(line: &str) -> Option<Directive> {
    let body = line.trim_start().strip_prefix('!')?;
    let mut tokens = body.split_whitespace();

    let reference = tokens.next()?;
    let theory = reference
        .strip_prefix(['R', 'U'])
        .filter(|t| matches!(*t, "HF" | "KS"))?;

    let first = tokens.next();
    let (method, basis_set) = match first {
        Some(token) if looks_like_basis_set(token) => (Some(theory.to_string()), Some(token)),
        Some(token) => (Some(token.to_string()), tokens.next()),
        None => (None, None),
    };

    Some(Directive {
        reference: reference.to_string(),
        method,
        basis_set: basis_set.map(str::to_string),
    })
}
