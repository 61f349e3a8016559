//! Generates `sample_document.docx` for manual testing: headings,
//! multilingual paragraphs, bullet lists, and a populated table.
//!
//! Run with: cargo run --bin generate_sample_doc

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

fn para(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn heading(text: &str, style: &str) -> Paragraph {
    para(text).style(style)
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(para(text))
}

fn row(texts: &[&str]) -> TableRow {
    TableRow::new(texts.iter().map(|text| cell(text)).collect())
}

fn main() -> anyhow::Result<()> {
    let team = Table::new(vec![
        row(&["姓名", "职责", "备注"]),
        row(&["张三", "产品经理", "负责需求分析和产品设计"]),
        row(&["李四", "开发工程师", "负责核心功能开发"]),
        row(&["王五", "测试工程师", "负责质量保证"]),
    ]);

    let file = std::fs::File::create("sample_document.docx")?;
    Docx::new()
        .add_paragraph(heading("项目计划文档", "Heading1"))
        .add_paragraph(para("这是一个示例文档，用于测试 plainify 工具的转换功能。"))
        .add_paragraph(heading("项目概述", "Heading1"))
        .add_paragraph(para(
            "本项目旨在开发一个高效的文档转换工具，将 Word 文档转换为结构化的 YAML 格式。",
        ))
        .add_paragraph(heading("项目特点", "Heading2"))
        .add_paragraph(para("• 支持多种文档元素"))
        .add_paragraph(para("• 保持原始结构"))
        .add_paragraph(para("    ◦ 嵌套列表也保留层级"))
        .add_paragraph(para("• AI 友好的输出格式"))
        .add_paragraph(heading("团队成员", "Heading2"))
        .add_table(team)
        .add_paragraph(para("以上示例展示了 plainify 工具能够处理的各种文档元素。"))
        .build()
        .pack(file)?;

    println!("wrote sample_document.docx");
    Ok(())
}
