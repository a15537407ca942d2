use super::Config;
use crate::error::Result;
use crate::files::DriveClient;
use crate::report::RunReport;
use crate::traversal::mirror;

pub async fn dump(client: &DriveClient, config: &Config) -> Result<RunReport> {
    println!(
        "Mirroring the drive into {} ...",
        config.output_root.display()
    );
    mirror(client, &config.output_root, &config.options()).await
}
