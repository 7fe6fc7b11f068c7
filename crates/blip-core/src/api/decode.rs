use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec::{ChannelPolicy, Decoder, Region};
use crate::media::open_image;
use crate::{BlipError, Result};

pub fn prepare() -> DecodeApi {
    DecodeApi::default()
}

#[derive(Default, Debug)]
pub struct DecodeApi {
    secret_image: Option<PathBuf>,
    region: Option<Region>,
    policy: ChannelPolicy,
    output: Option<PathBuf>,
}

impl DecodeApi {
    /// This is the image that contains the payload
    pub fn from_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Reads only this region, by default the whole image is read
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn use_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// The policy the payload was encoded with
    pub fn with_policy(mut self, policy: ChannelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// This is the file the payload will be saved to
    pub fn into_file(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Decodes the payload and writes it to the output file
    pub fn execute(self) -> Result<()> {
        let Some(output) = self.output.clone() else {
            return Err(BlipError::TargetNotSet);
        };
        let payload = self.execute_to_vec()?;

        let mut target_file =
            File::create(output).map_err(|source| BlipError::WriteError { source })?;
        target_file
            .write_all(&payload)
            .map_err(|source| BlipError::WriteError { source })
    }

    /// Decodes the payload and hands it back, no output file needed
    pub fn execute_to_vec(self) -> Result<Vec<u8>> {
        let Some(secret_image) = self.secret_image else {
            return Err(BlipError::CarrierNotSet);
        };
        let decoder = Decoder::with_policy(self.policy)?;
        let image = open_image(&secret_image)?;

        decoder.decode(&image, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let secret_image = temp_dir.path().join("secret.png");
        crate::api::encode::prepare()
            .with_message("Hello, World!")
            .with_width(8)
            .with_output(&secret_image)
            .execute()
            .expect("Failed to encode message into image");

        crate::api::decode::prepare()
            .from_secret_image(&secret_image)
            .into_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to decode message from image");

        let message = fs::read_to_string(temp_dir.path().join("secret-message.txt")).unwrap();
        assert_eq!(message, "Hello, World!");
    }

    #[test]
    fn should_require_an_image_and_a_target() {
        assert!(matches!(
            prepare().into_file("never-written.bin").execute(),
            Err(BlipError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().from_secret_image("secret.png").execute(),
            Err(BlipError::TargetNotSet)
        ));
    }
}
