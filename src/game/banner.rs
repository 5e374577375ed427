pub const WELCOME_ART: &str = r" _       __     __                               
| |     / /__  / /________  ____ ___  ___   
| | /| / / _ \/ / ___/ __ \/ __ `__ \/ _ \  
| |/ |/ /  __/ / /__/ /_/ / / / / / /  __/      
|__/|__/\___/_/\___/\____/_/ /_/ /_/\___/     
";

pub const THANK_YOU_ART: &str = r"  _______ _                 _        __     __          
 |__   __| |               | |       \ \   / /          
    | |  | |__   __ _ _ __ | | __     \ \_/ /_ _   _    
    | |  | '_ \ / _` | '_ \| |/ /      \   / _` | | | | 
    | |  | | | | (_| | | | |   <        | | (_| | |_| | 
    |_|  |_| |_|\__,_|_| |_|_|\_\       |_|\__,_|\__, | 
";

pub const THANK_YOU_MESSAGE: &str = "Thank you for using the program!";
