use corbas_derive::corbas_error;

#[corbas_error]
pub enum PipelineError {
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: std::io::Error,
        context: Option<String>,
    },
}

fn main() {}
