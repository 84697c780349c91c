use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ClientError {
    /// The request never produced a body: refused connection, DNS
    /// failure, CORS rejection, aborted fetch.
    #[snafu(display("chat request to {url} failed at {stage}: {details}"))]
    Transport {
        stage: &'static str,
        url: String,
        details: String,
    },
    /// A body arrived but was not the JSON shape the widget expects.
    #[snafu(display("chat response from {url} was not valid JSON: {details}"))]
    Decode {
        stage: &'static str,
        url: String,
        details: String,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_endpoint() {
        let transport = ClientError::Transport {
            stage: "send-request",
            url: "http://127.0.0.1:8000/chat".to_string(),
            details: "connection refused".to_string(),
        };
        assert!(transport.to_string().contains("http://127.0.0.1:8000/chat"));

        let decode = ClientError::Decode {
            stage: "decode-response",
            url: "http://127.0.0.1:8000/chat".to_string(),
            details: "expected value at line 1".to_string(),
        };
        assert!(decode.to_string().contains("not valid JSON"));
    }
}
