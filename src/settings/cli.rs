use super::Parser;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    /// HTTP method for the probe request (GET, POST, ...).
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Portal path to request, e.g. `issues/`.
    #[arg(long, default_value = "issues/")]
    pub path: String,
}
