//! 랜드마크 CSV 로더

use crate::core::features::{LandmarkRow, REQUIRED_COLUMNS};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV 파일에서 랜드마크 행 전체를 읽는다.
///
/// 파일이 없거나 필수 컬럼이 빠져 있으면 에러. 개별 값은 원문 그대로 보관하므로
/// 숫자가 아닌 값이 있어도 여기서는 실패하지 않는다.
pub fn read_landmark_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LandmarkRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("데이터 파일을 열 수 없음: {}", path.display()))?;

    let rows = read_landmark_rows(file)
        .with_context(|| format!("데이터 파일 파싱 실패: {}", path.display()))?;

    log::info!("{} 에서 {} 행 로드", path.display(), rows.len());
    Ok(rows)
}

/// 임의의 리더에서 CSV 를 읽는다 (헤더 필수).
pub fn read_landmark_rows<R: Read>(reader: R) -> Result<Vec<LandmarkRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();

    // 필수 컬럼 → 헤더 인덱스
    let mut column_index = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for column in REQUIRED_COLUMNS {
        match headers.iter().position(|h| h == column) {
            Some(idx) => column_index.push((column, idx)),
            None => bail!("필수 컬럼 누락: {}", column),
        }
    }

    // UTF-8 이 깨진 필드는 손실 변환 후 숫자 파싱에서 NaN 이 되도록 바이트로 읽는다
    let mut rows = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record?;
        let mut row = LandmarkRow::default();
        for &(column, idx) in &column_index {
            let raw = record.get(idx).unwrap_or(b"");
            row.set_field(column, &String::from_utf8_lossy(raw));
        }
        rows.push(row);
    }

    Ok(rows)
}

/// 랜드마크 행들을 CSV 로 저장 (필수 컬럼만)
pub fn write_landmark_csv<P: AsRef<Path>>(path: P, rows: &[LandmarkRow]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("CSV 파일을 만들 수 없음: {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
