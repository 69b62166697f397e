// CLIエントリポイント - 盤面を選んで探索し、解をテキストまたはJSONで出力する

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pegbrute::domain::board::catalog;
use pegbrute::{
    Board, Context, Position, PruneLimit, PruningSearch, Result, SearchConfig, SolutionRecord,
};

/// ペグソリテアの枝刈り探索ソルバー
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// 盤面の名前（english / european）
    #[arg(default_value = "english")]
    board: String,

    /// 初期の空きセルのX座標
    #[arg(short = 'x', long, default_value_t = 3)]
    empty_x: usize,

    /// 初期の空きセルのY座標
    #[arg(short = 'y', long, default_value_t = 3)]
    empty_y: usize,

    /// 枝刈り幅（0で無効・全探索）
    #[arg(short, long, default_value_t = PruneLimit::DEFAULT)]
    prune: usize,

    /// 対称性による重複除去を使う
    #[arg(short, long)]
    symmetry: bool,

    /// 全ての解をJSONで出力する
    #[arg(long)]
    json: bool,

    /// 世代ごとの詳細ログを出す
    #[arg(short, long)]
    verbose: bool,

    /// 詳細ログの出力先ファイル
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("エラー: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose || cli.log_file.is_some() {
        pegbrute::logging::enable_verbose_logging();
    }
    if let Some(path) = &cli.log_file {
        pegbrute::logging::init_log_file(&path.to_string_lossy())
            .with_context(|| format!("ログファイルを開けません: {}", path.display()))?;
    }

    let board = catalog::by_name(&cli.board)?;
    let initial = board
        .initial_position(cli.empty_x, cli.empty_y)
        .with_context(|| format!("初期の空きセルが不正です: ({}, {})", cli.empty_x, cli.empty_y))?;

    let config = SearchConfig {
        prune_limit: PruneLimit::new(cli.prune)?,
        use_symmetry: cli.symmetry,
    };
    config.validate()?;

    let mut search = PruningSearch::with_config(initial.clone(), &config);
    let found = search.search();

    if found == 0 {
        println!("解が見つかりませんでした。枝刈り幅を増やして再実行してください。");
        return Ok(());
    }

    if cli.json {
        let records: Vec<SolutionRecord> = (0..found)
            .map(|i| SolutionRecord {
                index: i,
                moves: search.get_solution(i).unwrap_or_default().to_vec(),
                complement: search
                    .get_final_position(i)
                    .map_or(false, |last| initial.is_complement(last)),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let summary = search.summary();
    println!(
        "解が{}件見つかりました（世代={} / 展開={} / 重複={} / 枝刈り={}）",
        found, summary.generations, summary.expanded, summary.duplicates, summary.pruned
    );

    // 補完解（最後のペグが最初の空きセルに戻る解）があればそれを表示する
    let complement = (0..found).find(|&i| {
        search
            .get_final_position(i)
            .map_or(false, |last| initial.is_complement(last))
    });
    let chosen = complement.unwrap_or(0);
    if complement.is_some() {
        println!("解 #{}は補完解です。", chosen + 1);
    }

    println!("初期局面:");
    print!("{}", render(&board, &initial));
    if let Some(last) = search.get_final_position(chosen) {
        println!("最終局面:");
        print!("{}", render(&board, last));
    }
    if let Some(moves) = search.get_solution(chosen) {
        println!("手順:");
        for (n, jump) in moves.iter().enumerate() {
            println!("  {:>2}. {}", n + 1, jump);
        }
    }

    Ok(())
}

/// 局面をテキスト描画する。' '=穴なし 'o'=ペグ '.'=空き穴
fn render(board: &Board, position: &Position<'_>) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let ch = if !board.allowed(x, y).unwrap_or(false) {
                ' '
            } else if position.occupied(x, y) {
                'o'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
