use corbas_derive::corbas_error;

#[corbas_error]
pub enum PipelineError {
    #[error("Transport error: {0}")]
    Transport(std::io::Error),
}

fn main() {}
