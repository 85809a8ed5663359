//! Ctrl+C（SIGINT）で処理全体を中断するハンドラ
//!
//! 評価は 1 回のブロッキング呼び出しなので、割り込みはプロセスごと終了させる。

use std::process;

/// SIGINT を受けたときの終了コード（128 + 2）
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// ハンドラを登録する。2 回目以降の登録はエラーになる（ctrlc の仕様）。
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        eprintln!();
        eprintln!("surgery-qc: interrupted");
        process::exit(INTERRUPTED_EXIT_CODE);
    })
}
