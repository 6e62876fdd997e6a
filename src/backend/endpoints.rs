use thiserror::Error;
use url::Url;

/// The backend URLs of a single device, `{base}/device/{id}/...`.
///
/// Ids are pushed as percent-encoded path segments so they cannot alter the path structure. Dot segments (`.`, `..`)
/// are rejected, URL normalization would drop them.
#[derive(Debug, Clone)]
pub struct Endpoints {
    device: Url,
}

impl Endpoints {
    pub fn new(base_url: &str, device_id: &str) -> Result<Self, EndpointError> {
        check_segment(device_id)?;
        let mut device = Url::parse(base_url)?;
        device
            .path_segments_mut()
            .map_err(|_| EndpointError::CannotBeABase(base_url.to_string()))?
            .pop_if_empty()
            .push("device")
            .push(device_id);

        Ok(Endpoints { device })
    }

    pub fn status(&self) -> Url {
        self.join(&["status"])
    }

    pub fn commands(&self) -> Url {
        self.join(&["commands"])
    }

    pub fn ack(&self, command_id: &str) -> Result<Url, EndpointError> {
        check_segment(command_id)?;
        Ok(self.join(&["ack", command_id]))
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.device.clone();
        // Infallible, `new` already verified the base can carry path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }
}

fn check_segment(segment: &str) -> Result<(), EndpointError> {
    match segment {
        "" | "." | ".." => Err(EndpointError::InvalidSegment(segment.to_string())),
        _ => Ok(()),
    }
}

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("backend url '{0}' cannot carry a path")]
    CannotBeABase(String),
    #[error("'{0}' cannot be used as a path segment")]
    InvalidSegment(String),
}
