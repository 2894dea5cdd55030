pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const ALERT_WARNING: &str = "p-4 mb-4 text-sm text-yellow-800 rounded-lg bg-yellow-50 dark:bg-gray-900 dark:text-yellow-400";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";

// Hero section
pub const HERO_CONTENT: &str = "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center";
pub const HERO_TITLE: &str = "text-5xl sm:text-7xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400 mb-6";

// Difficulty picker
pub const DIFFICULTY_GRID: &str = "mt-10 grid grid-cols-1 sm:grid-cols-3 gap-6";
pub const DIFFICULTY_BUTTON: &str = "w-full py-3 px-4 text-lg font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 rounded-lg transition-all duration-200 transform hover:translate-y-[-1px] hover:shadow-lg";

// Game board
pub const CLUE: &str = "text-xl sm:text-2xl font-semibold text-gray-900 dark:text-white text-center";
pub const ANSWER: &str = "mt-6 font-mono text-2xl sm:text-4xl tracking-wide text-gray-900 dark:text-white text-center whitespace-pre-wrap break-words";
pub const STATUS: &str = "mt-4 min-h-[1.75rem] font-mono text-lg text-red-600 dark:text-red-400 text-center";
pub const SCOREBOARD: &str = "mt-6 flex justify-center gap-6 text-sm sm:text-base font-medium text-gray-700 dark:text-gray-300";
pub const FLASH: &str = "text-yellow-500 dark:text-yellow-300 scale-110 transition-transform duration-300";
pub const KEY: &str = "w-7 h-9 sm:w-8 sm:h-10 flex items-center justify-center text-sm font-bold rounded mx-0.5 cursor-pointer";
pub const KEY_UNUSED: &str = "bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white";
pub const KEY_USED: &str = "bg-gray-400 dark:bg-gray-900 text-gray-500 dark:text-gray-600 opacity-50";
