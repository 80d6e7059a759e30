pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
  ██████╗██╗   ██╗██████╗ ██╗ ██████╗
 ██╔════╝██║   ██║██╔══██╗██║██╔═══██╗   curio
 ██║     ██║   ██║██████╔╝██║██║   ██║   v{}
 ██║     ██║   ██║██╔══██╗██║██║   ██║
 ╚██████╗╚██████╔╝██║  ██║██║╚██████╔╝
  ╚═════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝ ╚═════╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
