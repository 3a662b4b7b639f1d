//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：检查配置、初始化日志文件
//! 2. **读入题目**：问题 PDF + 正答 PDF（或问题 PDF 末尾），或者预置题库目录
//! 3. **出题**：过滤、随机抽一题、从标准输入读解答并判定
//!
//! 不做任何文本解析，解析全部委托给 services

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::config::Config;
use crate::infrastructure::{PageTexts, PdfTextExtractor};
use crate::models::loaders::load_pool;
use crate::models::question::Label;
use crate::services::{
    detect_round, label_resolver, parse_answers_from_document, parse_answers_from_tail,
    parse_questions,
};
use crate::utils::logging::{
    init_log_file, log_answers_parsed, log_questions_parsed, log_startup, truncate_text,
};
use crate::workflow::{QuizDeck, QuizItem, Verdict};

/// 由问题 PDF 和（可选的）正答 PDF 的逐页文本组成题目集合
///
/// 没有正答 PDF 时，从问题 PDF 的最后 `tail_pages` 页中搜索正答
pub fn build_pdf_deck(
    question_pages: &PageTexts,
    answer_pages: Option<&PageTexts>,
    tail_pages: usize,
) -> QuizDeck {
    let questions = parse_questions(question_pages.pages());
    let round = detect_round(&question_pages.full_text());
    log_questions_parsed(question_pages.page_count(), round, questions.len());

    let (answers, source) = match answer_pages {
        Some(pages) => (parse_answers_from_document(pages.pages()), "正答PDF"),
        None => (
            parse_answers_from_tail(question_pages.pages(), tail_pages),
            "问题PDF末尾页",
        ),
    };
    log_answers_parsed(answers.len(), source);

    let items = questions
        .into_iter()
        .map(|q| QuizItem::from_question(q, round, &answers))
        .collect();

    QuizDeck::new(items, !answers.is_empty())
}

/// 应用主结构
pub struct App {
    config: Config,
    extractor: PdfTextExtractor,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        let source = match (&config.pool_folder, &config.question_pdf) {
            (Some(folder), _) => format!("题库目录 {}", folder),
            (None, Some(pdf)) => format!("问题PDF {}", pdf),
            (None, None) => String::new(),
        };
        log_startup(&source);

        Ok(Self {
            config,
            extractor: PdfTextExtractor::new(),
        })
    }

    /// 运行应用主逻辑：读入 → 过滤 → 出一题 → 判定
    pub async fn run(&self) -> Result<()> {
        let deck = self.load_deck().await?;
        let deck = deck.filter(self.config.min_options())?;

        let item = deck
            .pick(self.config.rng_seed)
            .context("题目集合为空")?;

        println!("\n{}", item);

        let choice = read_choice().await?;
        let verdict = deck.judge(item, choice.as_ref());
        println!("{}", verdict);

        if !matches!(verdict, Verdict::KeyUnavailable | Verdict::AnswerMissing) {
            if let Some(raw) = &item.raw_block {
                println!("\n— 问题块（PDF原文）—\n{}", raw);
            }
        }

        Ok(())
    }

    /// 根据配置选择题库模式或 PDF 模式
    async fn load_deck(&self) -> Result<QuizDeck> {
        if let Some(folder) = &self.config.pool_folder {
            info!("\n📁 正在读取题库目录...");
            let pool = load_pool(folder).await?;
            info!("✓ 题库共 {} 题，跳过 {} 条", pool.len(), pool.skipped);

            let items = pool
                .records
                .into_iter()
                .map(QuizItem::from_pool_record)
                .collect();
            return Ok(QuizDeck::new(items, true));
        }

        let question_pdf = self
            .config
            .question_pdf
            .as_deref()
            .context("未设置问题PDF")?;

        info!("\n📄 正在解析问题PDF...");
        let question_pages = self.extractor.read_file(Path::new(question_pdf)).await?;

        let answer_pages = match &self.config.answer_pdf {
            Some(path) => {
                info!("📄 正在解析正答PDF...");
                Some(self.extractor.read_file(Path::new(path)).await?)
            }
            None => {
                info!("🔍 未提供正答PDF，从问题PDF末尾搜索正答...");
                None
            }
        };

        let deck = build_pdf_deck(&question_pages, answer_pages.as_ref(), self.config.tail_pages);

        if self.config.verbose_logging {
            for item in deck.items() {
                info!(
                    "{} | 选项 {} | 正答 {:?} | {}",
                    item.title,
                    item.options.len(),
                    item.answer.as_ref().map(Label::as_str),
                    truncate_text(&item.stem, 40)
                );
            }
        }

        Ok(deck)
    }
}

/// 从标准输入读一行解答，空行视为未选择
async fn read_choice() -> Result<Option<Label>> {
    println!("你的解答（A〜E，直接回车跳过）:");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("读取解答失败")?;

    let token = line.trim();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(label_resolver::resolve(&token.to_uppercase())))
}
