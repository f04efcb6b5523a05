use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoopMenuError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("끼니 선택 형식이 올바르지 않습니다: {0} (예: mon:breakfast)")]
    InvalidSelection(String),

    #[error("입력이 부족합니다: {0}")]
    MissingInput(String),

    #[error("에러: 선택한 끼니 개수({selected})와 파싱된 메뉴 개수({parsed})가 다릅니다.")]
    CountMismatch { selected: usize, parsed: usize },

    #[error("{0}개 파일 변환 실패")]
    BatchFailed(usize),

    #[error("Excel 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error("입력 취소: {0}")]
    Prompt(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] coop_menu_common::Error),
}

impl From<coop_menu_common::CountMismatch> for CoopMenuError {
    fn from(mismatch: coop_menu_common::CountMismatch) -> Self {
        CoopMenuError::CountMismatch {
            selected: mismatch.selected,
            parsed: mismatch.parsed,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoopMenuError>;
