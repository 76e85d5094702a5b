//! Usage text shown for `-h/--help`

/// Render the usage text for `binary_name`.
#[must_use]
pub fn usage_text(binary_name: &str) -> String {
    format!(
        "\
Usage:
    {binary_name} [OPTION]...
Description:
    -h, --help : help information
    -d, --dag_conf=CONFIG_FILE : module dag config file
    -p, --process_name=process_name: the process namespace for running this module, default in manager process
    -s, --sched_name=sched_name: sched policy conf for whole process, sched_name should be conf in cyber.pb.conf
Example:
    {binary_name} -h
    {binary_name} -d dag_conf_file1 -d dag_conf_file2 -p process_name -s sched_name
"
    )
}
