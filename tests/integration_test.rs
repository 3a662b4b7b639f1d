use me2_quiz::models::load_pool;
use me2_quiz::orchestrator::build_pdf_deck;
use me2_quiz::{
    detect_round, parse_answers_from_tail, parse_questions, AppError, Label, PageTexts, Round,
    Verdict,
};
use std::fs;

fn pages(texts: &[&str]) -> PageTexts {
    PageTexts::new(texts.iter().map(|t| t.to_string()).collect())
}

/// 模拟的问题 PDF：两种题头混用，末页带 "N : X" 形式的正答表
fn question_document() -> PageTexts {
    pages(&[
        "第４５回 第2種ME技術実力検定試験\n午前\n【問題　３】\n心電図について正しいのはどれか。\n１）Ｐ波は心房の興奮\n２）QRS波は心室の再分極\n３）T波は心房の再分極\n４）U波は必ず出現する\n５）PQ時間は0.5秒",
        "【問題 1】\n電撃について誤っているのはどれか。\n1) ミクロショック\n2) マクロショック\n3) 漏れ電流\n4) 接地",
        "第2問\n単位の組合せで正しいのはどれか。\nア．電圧\nイ．電流\nウ．抵抗\nエ．電力",
        "第4問\n選択肢のない設問",
        "正答一覧\n1 : 2\n2 : ウ\n3 : 1",
    ])
}

#[test]
fn test_parse_questions_end_to_end() {
    let doc = question_document();
    let questions = parse_questions(doc.pages());

    let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
    assert_eq!(numbers, [1, 2, 3, 4]);

    let q3 = &questions[2];
    assert_eq!(q3.stem, "心電図について正しいのはどれか。");
    assert_eq!(q3.options.len(), 5);
    assert_eq!(q3.options[0].label, Label::A);
    assert_eq!(q3.options[0].text, "P波は心房の興奮");

    let q2 = &questions[1];
    let labels: Vec<&str> = q2.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["A", "B", "C", "D"]);

    // 选项为空的题保留下来，由调用方决定是否出题
    assert!(questions[3].options.is_empty());
}

#[test]
fn test_round_and_tail_answers() {
    let doc = question_document();
    assert_eq!(detect_round(&doc.full_text()), Round::Known(45));

    let answers = parse_answers_from_tail(doc.pages(), 1);
    assert_eq!(answers.get(1), Some(&Label::B));
    assert_eq!(answers.get(2), Some(&Label::C));
    assert_eq!(answers.get(3), Some(&Label::A));
}

#[test]
fn test_build_deck_and_judge() {
    let doc = question_document();
    let deck = build_pdf_deck(&doc, None, 1);
    assert!(deck.key_available());
    assert_eq!(deck.len(), 4);

    let deck = deck.filter(4).expect("应该有可出的题");
    assert_eq!(deck.len(), 3);

    let item = deck.pick(7).expect("应该能抽到题");
    let answer = item.answer.clone().expect("每道可出的题都有正答");
    assert_eq!(
        deck.judge(item, Some(&answer)),
        Verdict::Correct { answer }
    );
}

#[test]
fn test_separate_answer_document() {
    let doc = pages(&["【問題 1】\n設問\n1) a\n2) b"]);
    let answer_doc = pages(&["第1問 : 2"]);
    let deck = build_pdf_deck(&doc, Some(&answer_doc), 4);
    assert_eq!(deck.items()[0].answer, Some(Label::B));
}

#[test]
fn test_without_answers_judging_unavailable() {
    let doc = pages(&["【問題 1】\n設問\n1) a\n2) b"]);
    let deck = build_pdf_deck(&doc, None, 4);
    assert!(!deck.key_available());

    let item = &deck.items()[0];
    assert_eq!(deck.judge(item, Some(&Label::A)), Verdict::KeyUnavailable);
}

#[test]
fn test_document_without_headings() {
    let doc = pages(&["見出しのないPDF"]);
    assert!(parse_questions(doc.pages()).is_empty());
    assert!(build_pdf_deck(&doc, None, 4).filter(2).is_err());
}

#[tokio::test]
async fn test_load_pool_skips_malformed_records() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(
        dir.path().join("45_am.json"),
        r#"[
            {"round": 45, "part": "午前", "number": 1, "stem": "s1",
             "options": ["a","b","c","d","e"], "answer": "3"},
            {"round": 45, "part": "午前", "number": 2, "stem": "s2",
             "options": ["a","b","c","d"], "answer": "1"},
            {"round": 45, "part": "午前", "number": 3, "stem": "s3",
             "options": ["a","b","c","d","e"], "answer": "6"}
        ]"#,
    )
    .unwrap();

    fs::write(
        dir.path().join("44_pm.toml"),
        r#"
[[questions]]
round = "44"
part = "午後"
number = 10
stem = "s10"
options = ["a", "b", "c", "d", "e"]
answer = "5"
"#,
    )
    .unwrap();

    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let pool = load_pool(dir.path().to_str().unwrap()).await.unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.skipped, 2);

    // 按文件名顺序读取
    assert_eq!(pool.records[0].number, 10);
    assert_eq!(pool.records[1].number, 1);
}

#[tokio::test]
async fn test_load_pool_keeps_good_records_next_to_bad_types() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(
        dir.path().join("46_am.json"),
        r#"[
            {"round": 46, "part": "午前", "number": 1, "stem": "s1",
             "options": ["a","b","c","d","e"], "answer": "2"},
            {"round": 46, "part": "午前", "number": 2, "stem": "s2",
             "options": ["a","b","c","d","e"], "answer": 3},
            {"round": 46, "part": "午前", "number": 3,
             "options": ["a","b","c","d","e"], "answer": "4"}
        ]"#,
    )
    .unwrap();

    fs::write(
        dir.path().join("46_pm.toml"),
        r#"
[[questions]]
round = 46
part = "午後"
number = "x"
stem = "s4"
options = ["a", "b", "c", "d", "e"]
answer = "1"

[[questions]]
round = 46
part = "午後"
number = 5
stem = "s5"
options = ["a", "b", "c", "d", "e"]
answer = "1"
"#,
    )
    .unwrap();

    let pool = load_pool(dir.path().to_str().unwrap()).await.unwrap();
    let numbers: Vec<u32> = pool.records.iter().map(|r| r.number).collect();
    assert_eq!(numbers, [1, 5]);
    assert_eq!(pool.skipped, 3);
}

#[test]
fn test_load_pool_missing_directory() {
    let result = tokio_test::block_on(load_pool("/nonexistent/pool/dir"));
    assert!(matches!(result, Err(AppError::File(_))));
}
