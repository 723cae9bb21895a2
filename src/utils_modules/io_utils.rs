use crate::common::*;

#[doc = "json 파일을 읽어서 객체로 변환해주는 함수"]
/// # Arguments
/// * `file_path` - 읽을 대상 json 파일이 존재하는 경로
///
/// # Returns
/// * Result<T, anyhow::Error>
pub fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T, anyhow::Error> {
    let file: File = File::open(file_path).map_err(|e| {
        anyhow!(
            "[read_json_from_file] Failed to open '{}': {:?}",
            file_path.display(),
            e
        )
    })?;

    let reader: BufReader<File> = BufReader::new(file);
    let parsed: T = serde_json::from_reader(reader).map_err(|e| {
        anyhow!(
            "[read_json_from_file] Failed to parse '{}': {:?}",
            file_path.display(),
            e
        )
    })?;

    Ok(parsed)
}

#[doc = "Function that serializes an object to pretty json and writes it to a file."]
/// # Arguments
/// * `data`      - Object to serialize
/// * `file_path` - Target file path (overwritten when it already exists)
///
/// # Returns
/// * Result<(), anyhow::Error>
pub fn save_json_to_file<T: Serialize>(data: &T, file_path: &Path) -> Result<(), anyhow::Error> {
    let json_text: String = serde_json::to_string_pretty(data)
        .map_err(|e| anyhow!("[save_json_to_file] Failed to serialize data: {:?}", e))?;

    std::fs::write(file_path, json_text).map_err(|e| {
        anyhow!(
            "[save_json_to_file] Failed to write '{}': {:?}",
            file_path.display(),
            e
        )
    })?;

    info!("Metrics saved to {}", file_path.display());

    Ok(())
}
