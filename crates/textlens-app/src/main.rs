//! # textlens-app
//!
//! TEXTLENS 바이너리 진입점.
//! 어댑터 와이어링, 설정 로드, 서버/클라이언트 서브커맨드.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textlens_client::present::{self, ArboardClipboard, CopyOutcome};
use textlens_client::session::ExtractionSession;
use textlens_client::submit::RecognitionClient;
use textlens_core::config_manager::ConfigManager;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// TEXTLENS — 이미지에서 텍스트 추출
///
/// 파일 또는 URL로 이미지를 제출하면 OCR로 추출된 텍스트를 보여준다.
#[derive(Parser, Debug)]
#[command(name = "textlens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info", global = true)]
    log_level: String,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 인식 서비스 실행
    Serve {
        /// 수신 포트 (설정 파일 값 대신 사용)
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
    /// 이미지를 제출하고 추출 텍스트 출력
    Extract {
        /// 로컬 이미지 파일 경로
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        file: Option<PathBuf>,

        /// 원격 이미지 URL (서버가 바이트를 가져온다)
        #[arg(long)]
        url: Option<String>,

        /// 추출 텍스트를 클립보드에 복사
        #[arg(long)]
        clip: bool,

        /// 인식 서비스 base URL (설정 파일 값 대신 사용)
        #[arg(long, short = 's')]
        server: Option<String>,
    },
    /// 미리보기용 엣지 필터를 이미지 파일에 적용
    Edge {
        /// 입력 이미지 경로
        input: PathBuf,
        /// 출력 PNG 경로
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone())?,
        None => ConfigManager::new()?,
    };
    info!("설정 파일: {}", config_manager.config_path().display());

    match cli.command {
        Command::Serve { port } => serve(&config_manager, port).await,
        Command::Extract {
            file,
            url,
            clip,
            server,
        } => extract(&config_manager, file, url, clip, server).await,
        Command::Edge { input, output } => edge(&input, &output).await,
    }
}

/// 인식 서비스 실행 — ctrl-c로 종료
#[cfg(feature = "ocr")]
async fn serve(config_manager: &ConfigManager, port: Option<u16>) -> Result<()> {
    use std::sync::Arc;
    use textlens_server::WebServer;
    use textlens_vision::ocr::TesseractRecognizer;
    use tokio::sync::watch;

    let mut config = config_manager.get();
    if let Some(port) = port {
        config.server.port = port;
    }

    let recognizer = Arc::new(TesseractRecognizer::from_config(&config.ocr));
    let server = WebServer::new(recognizer, &config.fetch, config.server)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c 수신, 종료 시작");
            let _ = shutdown_tx.send(true);
        }
    });

    server.run(shutdown_rx).await.context("서버 실행 실패")
}

/// ocr feature 없이 빌드된 경우 — 인식기가 없으므로 서비스 불가
#[cfg(not(feature = "ocr"))]
async fn serve(_config_manager: &ConfigManager, _port: Option<u16>) -> Result<()> {
    anyhow::bail!("이 빌드에는 OCR 엔진이 없습니다 — `--features ocr`로 빌드하세요")
}

/// 이미지 제출 워크플로: 획득 → 제출 → 프레젠테이션
async fn extract(
    config_manager: &ConfigManager,
    file: Option<PathBuf>,
    url: Option<String>,
    clip: bool,
    server: Option<String>,
) -> Result<()> {
    let mut config = config_manager.get();
    if let Some(server) = server {
        config.client.base_url = server;
    }

    let mut session = ExtractionSession::new();

    // 획득: 파일 또는 URL 중 정확히 하나 (clap이 강제)
    if let Some(path) = file {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("이미지 파일 읽기 실패: {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let mime_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .to_string();
        session.select_file(bytes, filename, mime_type);
    } else if let Some(url) = url {
        session.select_url(url);
    }

    let client = RecognitionClient::new(&config.client)?;

    // 진행 추정치 표시 — 장식용 카운트다운, 실측 아님
    let mut progress = session.progress_watch();
    let printer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let remaining = *progress.borrow_and_update();
            if remaining > 0 {
                eprintln!("예상 남은 시간: {remaining}s");
            }
        }
    });

    let state = session.submit(&client).await?.clone();
    printer.abort();

    println!("{}", present::render_state(&state));

    if clip {
        if let Some(text) = state.extracted_text() {
            match ArboardClipboard::new()
                .and_then(|mut sink| present::copy_to_clipboard(&mut sink, text))
            {
                Ok(CopyOutcome::Copied) => eprintln!("클립보드에 복사했습니다."),
                Ok(CopyOutcome::NothingToCopy) => eprintln!("복사할 텍스트가 없습니다."),
                Err(e) => {
                    warn!("클립보드 복사 실패: {e}");
                    eprintln!("클립보드 복사에 실패했습니다.");
                }
            }
        }
    }

    Ok(())
}

/// 미리보기 엣지 필터 적용 — 제출 경로와 무관한 표시용 변환
async fn edge(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("이미지 파일 읽기 실패: {}", input.display()))?;

    let filtered = textlens_vision::edge::apply_edge_filter_async(bytes)
        .await
        .context("엣지 필터 적용 실패")?;

    std::fs::write(output, filtered)
        .with_context(|| format!("출력 쓰기 실패: {}", output.display()))?;

    info!("엣지 필터 결과 저장: {}", output.display());
    Ok(())
}
