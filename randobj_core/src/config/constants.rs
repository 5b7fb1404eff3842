pub mod compile_time {
    pub mod format {
        /// Separator between objects in a generated file
        /// FORMAT: No escaping exists, generated objects never contain it
        pub const SEPARATOR: char = ',';

        /// Separator between record lines in the processor output file
        pub const RECORD_SEPARATOR: &str = "\n";
    }

    pub mod generation {
        /// Inclusive magnitude bound for generated integers
        pub const INTEGER_BOUND: i32 = 10_000;

        /// Inclusive magnitude bound for generated real numbers
        pub const REAL_BOUND: f64 = 10_000.0;

        /// Fractional digits rendered for generated real numbers
        pub const REAL_DECIMAL_PLACES: usize = 6;

        /// Length range for alphabetical strings and alphanumeric cores
        pub const MIN_STRING_LENGTH: usize = 1;
        pub const MAX_STRING_LENGTH: usize = 20;

        /// Maximum spaces placed before and after an alphanumeric core
        pub const MAX_PADDING: usize = 10;

        /// Buffered bytes before a chunk is flushed to the output (1MB)
        /// RESOURCE: Bounds memory use while generating large files
        pub const FLUSH_THRESHOLD_BYTES: usize = 1024 * 1024;

        /// Objects generated between progress reports
        pub const PROGRESS_INTERVAL_OBJECTS: u64 = 10_000;
    }

    pub mod classification {
        /// Segments processed between progress reports
        pub const PROGRESS_INTERVAL_TOKENS: usize = 1_000;
    }

    pub mod defaults {
        /// Output file used by the generator when none is given
        pub const OUTPUT_PATH: &str = "random_objects.txt";

        /// Target size in MB used by the generator when none is given
        pub const TARGET_SIZE_MB: f64 = 10.0;

        pub const BYTES_PER_MB: u64 = 1024 * 1024;
    }

    pub mod logging {
        /// Maximum log message length
        /// RESOURCE: Prevents huge token values from flooding the log
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
