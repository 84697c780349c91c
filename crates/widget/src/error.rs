use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum WidgetError {
    #[snafu(display("browser document is unavailable at {stage}"))]
    NoDocument { stage: &'static str },
    #[snafu(display("{details} at {stage}"))]
    Dom {
        stage: &'static str,
        details: String,
    },
}

pub type WidgetResult<T> = Result<T, WidgetError>;
