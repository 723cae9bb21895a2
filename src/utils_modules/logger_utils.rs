use crate::common::*;

#[doc = "로그 내용 포멧팅 함수"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        &record.args()
    )
}

#[doc = "전역 로거설정 함수 - 파일 및 콘솔에 동시 출력"]
pub fn set_global_logger() {
    let logger: Logger = match Logger::try_with_str("info") {
        Ok(logger) => logger,
        Err(e) => {
            panic!("[set_global_logger] Failed to build logger spec: {:?}", e);
        }
    };

    match logger
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
    {
        Ok(_) => (),
        Err(e) => {
            panic!("[set_global_logger] Failed to start logger: {:?}", e);
        }
    }
}
