use clap::Parser;
use kaihan_gallery::{cli, config, error, generator, logging, report, titles};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use kaihan_gallery_common::SystemClock;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Generate { images, output } => {
            println!("🖌️ kaihan-gallery - 作品数据生成\n");

            let images_dir = images.unwrap_or_else(|| config.images_dir.clone());
            let output = output.unwrap_or_else(|| config.output.clone());

            // 1. スキャンと日時推定
            println!("[1/2] 正在扫描书法作品: {}", images_dir.display());
            let collection = generator::generate(&images_dir, config.year_window(), &SystemClock)?;
            println!("✔ {} 幅作品\n", collection.total_count);

            // 2. 保存
            println!("[2/2] 保存中...");
            generator::write_collection(&collection, &output)?;

            report::print_report(&collection, &output);
            println!("\n✅ 数据生成完成！请在浏览器中打开 index.html 查看作品集。");
        }

        Commands::Report { input } => {
            report::run_report(&input)?;
        }

        Commands::Titles { input, output, all } => {
            println!("📝 kaihan-gallery - 作品命名\n");
            titles::run_interactive_titles(&input, output.as_deref(), all)?;
        }

        Commands::Config { set_images_dir, set_output, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(dir) = set_images_dir {
                config.images_dir = dir;
                changed = true;
            }
            if let Some(output) = set_output {
                config.output = output;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 设置已保存: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("设置:");
                println!("  图片目录: {}", config.images_dir.display());
                println!("  输出文件: {}", config.output.display());
                println!(
                    "  文件名日期年份范围: {} - {}",
                    config.min_pattern_year, config.max_pattern_year
                );
            }
        }
    }

    Ok(())
}
