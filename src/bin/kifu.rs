//! sfen 局面と指し手列を受け取り、棋譜や最終局面を出力する。

use anyhow::Context as _;
use clap::arg_enum;
use log::{info, LevelFilter};
use structopt::StructOpt;

use sfen_kifu::*;

arg_enum! {
    /// 出力内容。
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    enum Output {
        Kifu,
        Sfen,
        Both,
    }
}

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(long, possible_values = &Output::variants(), case_insensitive = true, default_value = "Kifu")]
    output: Output,

    /// 直前と同じマスへの手を "同" 表記にしない。
    #[structopt(long)]
    no_same: bool,

    /// ログの詳細度。重ねるほど詳細になる。
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u64,

    /// sfen 局面文字列(4 フィールド)。"startpos" なら平手初期局面。
    sfen: String,

    /// sfen 指し手文字列の列。
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    init_logger(opt.verbose)?;

    let mut pos = if opt.sfen == "startpos" {
        Position::startpos()
    } else {
        Position::from_sfen(&opt.sfen).with_context(|| format!("invalid position: {}", opt.sfen))?
    };

    let run_opts = RunOptions {
        kifu: matches!(opt.output, Output::Kifu | Output::Both),
        compress_same: !opt.no_same,
    };

    let kifus = pos
        .apply_moves(&opt.moves, run_opts)
        .context("cannot apply moves")?;

    for kifu in kifus.unwrap_or_default() {
        println!("{}", kifu);
    }

    if matches!(opt.output, Output::Sfen | Output::Both) {
        println!("{}", pos.to_sfen());
    }

    info!("最終局面:\n{}", pos);

    Ok(())
}

fn init_logger(verbose: u64) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
