/// 导入文件中的一行奖品数据 (name,quantity,imagePath)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemImportRow {
    pub name: String,
    pub quantity: i32,
    pub item_pic: Option<String>,
}

/// 解析逗号分隔的奖品文本
///
/// - 空行忽略, 兼容 `\r\n`
/// - 第一行首列为 `name` (不区分大小写) 时视为表头跳过
/// - 每个数据行独立解析, 失败行返回原因而不是中断整个导入
pub fn parse_item_rows(text: &str) -> Vec<Result<ItemImportRow, String>> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .peekable();

    if lines.peek().is_some_and(|first| is_header(first)) {
        lines.next();
    }

    lines.map(parse_row).collect()
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .map(clean_field)
        .is_some_and(|field| field.eq_ignore_ascii_case("name"))
}

fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

fn parse_row(line: &str) -> Result<ItemImportRow, String> {
    let mut fields = line.split(',').map(clean_field);

    let name = fields.next().unwrap_or_default();
    if name.is_empty() {
        return Err(format!("missing name in row '{line}'"));
    }

    let quantity = match fields.next() {
        Some(raw) if !raw.is_empty() => raw
            .parse::<i32>()
            .map_err(|_| format!("invalid quantity '{raw}' in row '{line}'"))?,
        _ => return Err(format!("missing quantity in row '{line}'")),
    };
    if quantity < 0 {
        return Err(format!("negative quantity in row '{line}'"));
    }

    let item_pic = fields
        .next()
        .filter(|pic| !pic.is_empty())
        .map(str::to_string);

    Ok(ItemImportRow {
        name: name.to_string(),
        quantity,
        item_pic,
    })
}
