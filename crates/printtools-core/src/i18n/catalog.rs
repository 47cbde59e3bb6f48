//! Static translation tables. Templates may contain `{{token}}` placeholders.

pub(super) const EN: &[(&str, &str)] = &[
    ("brand", "PrintTools"),
    ("navHome", "Home"),
    ("navImageTiler", "Image Tile Printing"),
    ("languageSwitchAria", "Toggle language between Japanese and English"),
    ("githubLinkLabel", "View source on GitHub"),
    ("githubLinkAria", "Open the PrintTools repository on GitHub"),
    ("notFoundTitle", "Page not found"),
    ("notFoundMessage", "The requested page does not exist."),
    ("notFoundBackHome", "Back to home"),
    ("homeTitle", "Welcome to PrintTools"),
    (
        "homeIntro1",
        "PrintTools is an experimental project that delivers print utilities right on your desktop.",
    ),
    (
        "homeIntro2",
        "At the moment you can repeat a single image across a sheet such as A4 or Letter.",
    ),
    ("homeIntro3", "Choose a feature from the navigation bar above to get started."),
    ("imageTilingTitle", "Image Tile Printing"),
    (
        "imageTilingLede",
        "Load an image, adjust the paper and tile settings, and print the generated sheet.",
    ),
    (
        "localProcessingNotice",
        "All images stay on this computer and are never uploaded to any server.",
    ),
    ("imageSectionLegend", "Image"),
    ("imageChooseFile", "Select an image file"),
    ("imageLoaded", "Image loaded. Review the preview before printing."),
    ("imagePending", "No image has been loaded yet."),
    ("imageLoadFailed", "The image could not be loaded: {{error}}"),
    ("paperSectionLegend", "Paper"),
    ("paperSizeLabel", "Size"),
    ("paperOrientationLabel", "Orientation"),
    ("paperOrientationPortrait", "Portrait"),
    ("paperOrientationLandscape", "Landscape"),
    ("paperMarginLabel", "Margin (mm)"),
    ("paperCustomWidth", "Width (mm)"),
    ("paperCustomHeight", "Height (mm)"),
    ("tileSectionLegend", "Tiles"),
    ("tileWidthLabel", "Width (mm)"),
    ("tileHeightLabel", "Height (mm)"),
    ("tileLockAspect", "Lock image aspect ratio"),
    ("tileSpacingLabel", "Spacing between tiles (mm)"),
    ("tilesSummary", "Columns {{columns}} × Rows {{rows}} = {{total}} tiles"),
    ("printButton", "Print"),
    ("exportPng", "Save as PNG"),
    ("sheetSaved", "Sheet saved to {{path}}"),
    ("settingsMenu", "Settings"),
    ("settingsImport", "Import settings..."),
    ("settingsExport", "Export settings..."),
    ("settingsReset", "Reset to defaults"),
    ("settingsPanelAria", "Settings panel"),
    ("previewAriaLabel", "Print preview"),
    ("previewImageAlt", "Tile preview image"),
    ("previewPlaceholder", "Preview will appear here."),
    ("tipsTitle", "Printing tips"),
    (
        "tipsActualSize",
        "Choose 'Actual size' or 'Do not scale to fit paper' in the print dialog.",
    ),
    (
        "tipsDefaultScale",
        "Keep the scaling at 'default' or '100%' so the layout is not resized.",
    ),
    (
        "tipsNoMargin",
        "Set the printer margins to 'none' to use the full sheet when possible.",
    ),
    (
        "tipsPrinterMarginWarning",
        "Printer margin limitations may still prevent true borderless printing.",
    ),
    (
        "tipsPaperMatch",
        "Ensure the paper size selected here matches the printer settings.",
    ),
    ("paperLabelA5", "A5 (148 × 210 mm)"),
    ("paperLabelA4", "A4 (210 × 297 mm)"),
    ("paperLabelA3", "A3 (297 × 420 mm)"),
    ("paperLabelLetter", "US Letter (215.9 × 279.4 mm)"),
    ("paperLabelLegal", "US Legal (215.9 × 355.6 mm)"),
    ("paperLabelCustom", "Custom"),
];

pub(super) const JA: &[(&str, &str)] = &[
    ("brand", "PrintTools"),
    ("navHome", "ホーム"),
    ("navImageTiler", "画像タイル印刷"),
    ("languageSwitchAria", "日本語と英語を切り替えます"),
    ("githubLinkLabel", "GitHub でソースを見る"),
    ("githubLinkAria", "GitHub の PrintTools リポジトリを開きます"),
    ("notFoundTitle", "ページが見つかりません"),
    ("notFoundMessage", "指定されたページは存在しません。"),
    ("notFoundBackHome", "ホームに戻る"),
    ("homeTitle", "PrintTools へようこそ"),
    (
        "homeIntro1",
        "PrintTools はデスクトップだけで印刷用のツールを提供する実験的なプロジェクトです。",
    ),
    (
        "homeIntro2",
        "現在は単一の画像を A4 や Letter などの用紙いっぱいにタイル配置できます。",
    ),
    ("homeIntro3", "上部のナビゲーションから機能を選択してください。"),
    ("imageTilingTitle", "画像タイル印刷"),
    (
        "imageTilingLede",
        "画像を読み込み、用紙とタイルを調整して、生成したシートを印刷できます。",
    ),
    (
        "localProcessingNotice",
        "選択した画像はこのコンピューター内だけで処理され、サーバーに送信されることはありません。",
    ),
    ("imageSectionLegend", "画像"),
    ("imageChooseFile", "画像ファイルを選択"),
    ("imageLoaded", "画像を読み込みました。プレビューで確認してください。"),
    ("imagePending", "まだ画像が読み込まれていません。"),
    ("imageLoadFailed", "画像を読み込めませんでした: {{error}}"),
    ("paperSectionLegend", "用紙"),
    ("paperSizeLabel", "サイズ"),
    ("paperOrientationLabel", "向き"),
    ("paperOrientationPortrait", "縦"),
    ("paperOrientationLandscape", "横"),
    ("paperMarginLabel", "余白 (mm)"),
    ("paperCustomWidth", "幅 (mm)"),
    ("paperCustomHeight", "高さ (mm)"),
    ("tileSectionLegend", "タイル"),
    ("tileWidthLabel", "幅 (mm)"),
    ("tileHeightLabel", "高さ (mm)"),
    ("tileLockAspect", "画像の縦横比を維持"),
    ("tileSpacingLabel", "タイル間の余白 (mm)"),
    ("tilesSummary", "横 {{columns}} × 縦 {{rows}} = 合計 {{total}} 枚"),
    ("printButton", "印刷する"),
    ("exportPng", "PNG として保存"),
    ("sheetSaved", "{{path}} に保存しました"),
    ("settingsMenu", "設定"),
    ("settingsImport", "設定を読み込む..."),
    ("settingsExport", "設定を書き出す..."),
    ("settingsReset", "初期値に戻す"),
    ("settingsPanelAria", "設定パネル"),
    ("previewAriaLabel", "印刷プレビュー"),
    ("previewImageAlt", "印刷画像"),
    ("previewPlaceholder", "ここにプレビューが表示されます。"),
    ("tipsTitle", "印刷時のヒント"),
    (
        "tipsActualSize",
        "印刷ダイアログでは「実際のサイズ」「用紙に合わせて縮小なし」を選択してください。",
    ),
    (
        "tipsDefaultScale",
        "倍率は「規定」または「100%」に設定し、拡大・縮小が入らないようにしてください。",
    ),
    (
        "tipsNoMargin",
        "プリンターの印刷設定で余白を「なし」にすると紙いっぱいに印刷しやすくなります。",
    ),
    (
        "tipsPrinterMarginWarning",
        "プリンターの余白設定によっては、完全な縁なし印刷ができない場合があります。",
    ),
    (
        "tipsPaperMatch",
        "異なる用紙サイズを利用する場合は、用紙設定とプリンター側の用紙指定が一致しているか確認してください。",
    ),
    ("paperLabelA5", "A5 (148 × 210 mm)"),
    ("paperLabelA4", "A4 (210 × 297 mm)"),
    ("paperLabelA3", "A3 (297 × 420 mm)"),
    ("paperLabelLetter", "US Letter (215.9 × 279.4 mm)"),
    ("paperLabelLegal", "US Legal (215.9 × 355.6 mm)"),
    ("paperLabelCustom", "カスタム"),
];
